use std::{collections::VecDeque, iter::Peekable};

/// A peekable iterator that tokens can be pushed back onto after looking past them
#[derive(Debug)]
pub struct PrependingPeekableIterator<I: Iterator> {
    queue: VecDeque<I::Item>,
    inner: Peekable<I>,
}
impl<I: Iterator> Iterator for PrependingPeekableIterator<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.queue.pop_front() {
            Some(item) => Some(item),
            None => self.inner.next(),
        }
    }
}
impl<I: Iterator> PrependingPeekableIterator<I> {
    pub fn new(i: I) -> Self {
        Self { queue: VecDeque::new(), inner: i.peekable() }
    }
    pub fn peek(&mut self) -> Option<&I::Item> {
        match self.queue.front() {
            Some(front) => Some(front),
            None => self.inner.peek(),
        }
    }
    /// Puts `items` back in front, keeping their order
    pub fn prepend_extend<J: IntoIterator<Item = I::Item>>(&mut self, items: J) {
        for (index, item) in items.into_iter().enumerate() {
            self.queue.insert(index, item);
        }
    }
}
