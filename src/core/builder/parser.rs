use crate::core::builder::errors::ParseError;
use crate::core::builder::graph_builder::GraphBuilder;
use crate::core::components::module::{Module, ModuleKind, BROADCASTER};
use crate::core::graph::ModuleGraph;
use crate::core::types::ModuleId;

const ARROW: &str = "->";

/// Parse one `<module> -> <dest>, <dest>, ...` line.
///
/// Blank lines yield `Ok(None)`.
pub fn parse_declaration(line: usize, text: &str) -> Result<Option<Module>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let malformed = || ParseError::MalformedDeclaration {
        line,
        text: trimmed.to_string(),
    };

    let (head, tail) = trimmed.split_once(ARROW).ok_or_else(malformed)?;
    let head = head.trim();
    if head.is_empty() || head.contains(char::is_whitespace) || tail.contains(ARROW) {
        return Err(malformed());
    }

    let (kind, name) = parse_head(line, head)?;

    let mut destinations = Vec::new();
    for destination in tail.split(',') {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(ParseError::EmptyDestination { line });
        }
        if destination.contains(char::is_whitespace) {
            return Err(malformed());
        }
        destinations.push(ModuleId::from(destination));
    }

    Ok(Some(Module::new(ModuleId::from(name), kind, destinations)))
}

fn parse_head(line: usize, head: &str) -> Result<(ModuleKind, &str), ParseError> {
    if head == BROADCASTER {
        return Ok((ModuleKind::Broadcaster, head));
    }

    let mut chars = head.chars();
    let first = chars.next();
    let kind = [ModuleKind::Toggle, ModuleKind::Detector]
        .into_iter()
        .find(|kind| kind.prefix() == first)
        .ok_or_else(|| ParseError::UnknownKind {
            line,
            name: head.to_string(),
        })?;

    let name = chars.as_str();
    if name.is_empty() {
        return Err(ParseError::EmptyName { line });
    }
    Ok((kind, name))
}

/// Parse a full declaration listing into a graph.
///
/// Fails on the first bad line; no partial graph is returned.
pub fn parse_declarations<I, S>(lines: I) -> Result<ModuleGraph, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new();
    for (index, text) in lines.into_iter().enumerate() {
        let line = index + 1;
        if let Some(module) = parse_declaration(line, text.as_ref())? {
            builder.declare(line, module)?;
        }
    }
    builder.build()
}
