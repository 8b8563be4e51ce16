/// Errors raised while turning declarations into a module graph.
///
/// Line numbers are 1-based. Declarations added through `GraphBuilder`
/// directly report the position of the offending declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line does not have the `<module> -> <dest>, ...` shape
    MalformedDeclaration { line: usize, text: String },
    /// Module name carries no recognised kind prefix
    UnknownKind { line: usize, name: String },
    /// Kind prefix with nothing after it
    EmptyName { line: usize },
    /// Empty entry in the destination list
    EmptyDestination { line: usize },
    /// Same module declared twice
    DuplicateModule { line: usize, name: String },
}

impl ParseError {
    /// Line the error was found on
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedDeclaration { line, .. }
            | ParseError::UnknownKind { line, .. }
            | ParseError::EmptyName { line }
            | ParseError::EmptyDestination { line }
            | ParseError::DuplicateModule { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedDeclaration { line, text } => {
                write!(f, "Malformed declaration on line {}: '{}'", line, text)
            }
            ParseError::UnknownKind { line, name } => {
                write!(f, "Unknown module kind on line {}: '{}'", line, name)
            }
            ParseError::EmptyName { line } => write!(f, "Empty module name on line {}", line),
            ParseError::EmptyDestination { line } => {
                write!(f, "Empty destination on line {}", line)
            }
            ParseError::DuplicateModule { line, name } => {
                write!(f, "Module '{}' declared twice (line {})", name, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}
