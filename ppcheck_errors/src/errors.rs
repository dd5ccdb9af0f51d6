use ppcheck_common::spanned::Location;

use crate::{Diagnostic, DiagnosticSeverity, Label, LabelKind};

#[derive(Debug)]
pub struct UnterminatedComment {
    pub opening: Location,
}
impl Diagnostic for UnterminatedComment {
    fn title<'a>(&self) -> &'a str {
        "Unterminated comment"
    }
    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }
    fn labels(&self) -> Vec<Label> {
        vec![Label {
            kind: LabelKind::Primary,
            location: self.opening.clone(),
            message: "This comment is never closed".to_string(),
        }]
    }
}

#[derive(Debug)]
pub struct UnterminatedLiteral {
    pub opening: Location,
    pub end_of_line: Location,
    pub quote: char,
}
impl Diagnostic for UnterminatedLiteral {
    fn title<'a>(&self) -> &'a str {
        match self.quote {
            '\'' => "Unterminated character literal",
            _ => "Unterminated string literal",
        }
    }
    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }
    fn labels(&self) -> Vec<Label> {
        vec![
            Label {
                kind: LabelKind::Primary,
                location: self.opening.clone(),
                message: "Literal starts here".to_string(),
            },
            Label {
                kind: LabelKind::Secondary,
                location: self.end_of_line.clone(),
                message: format!("Expected a closing {} before the end of the line", self.quote),
            },
        ]
    }
}

#[derive(Debug)]
pub struct MissingInclude {
    pub location: Location,
    pub name: String,
    pub searched: Vec<String>,
}
impl Diagnostic for MissingInclude {
    fn title<'a>(&self) -> &'a str {
        "Included file not found"
    }
    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }
    fn labels(&self) -> Vec<Label> {
        vec![Label {
            kind: LabelKind::Primary,
            location: self.location.clone(),
            message: format!("`{}` does not exist in any include directory", self.name),
        }]
    }
    fn notes(&self) -> Vec<String> {
        self.searched.iter().map(|dir| format!("searched {}", dir)).collect()
    }
}

#[derive(Debug)]
pub struct IncludeTooDeep {
    pub location: Location,
    pub limit: usize,
}
impl Diagnostic for IncludeTooDeep {
    fn title<'a>(&self) -> &'a str {
        "Includes nested too deeply"
    }
    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }
    fn labels(&self) -> Vec<Label> {
        vec![Label {
            kind: LabelKind::Primary,
            location: self.location.clone(),
            message: format!("This include would go past {} nested files", self.limit),
        }]
    }
    fn notes(&self) -> Vec<String> {
        vec!["a file probably includes itself".to_string()]
    }
}

#[derive(Debug)]
pub struct MalformedInclude(pub Location);
impl Diagnostic for MalformedInclude {
    fn title<'a>(&self) -> &'a str {
        "Malformed include directive"
    }
    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }
    fn labels(&self) -> Vec<Label> {
        vec![Label {
            kind: LabelKind::Primary,
            location: self.0.clone(),
            message: "Expected `<file>` or `\"file\"`".to_string(),
        }]
    }
}

pub struct ImportDirective(pub Location);
impl Diagnostic for ImportDirective {
    fn title<'a>(&self) -> &'a str {
        "#import is a deprecated extension"
    }
    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Warning
    }
    fn labels(&self) -> Vec<Label> {
        vec![Label {
            kind: LabelKind::Primary,
            location: self.0.clone(),
            message: "Treated as an include that only happens once".to_string(),
        }]
    }
}

pub struct IgnoredTrigraph(pub Location);
impl Diagnostic for IgnoredTrigraph {
    fn title<'a>(&self) -> &'a str {
        "Trigraph ignored"
    }
    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Warning
    }
    fn labels(&self) -> Vec<Label> {
        vec![Label {
            kind: LabelKind::Primary,
            location: self.0.clone(),
            message: "Trigraphs are disabled, this is kept as written".to_string(),
        }]
    }
}
