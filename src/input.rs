//! Readers for edge and property records.
//!
//! Both formats are line oriented and stop at the first blank line or EOF:
//!
//! ```text
//! 0 1        edge: two node ids
//! 1 2
//!
//! 0 3 1 4    property record: node id, then its values
//! ```
//!
//! Rendering results is left to the caller.

use crate::error::{Error, Result};
use crate::graph::NodeId;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Read `u v` edge lines until a blank line or EOF.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Vec<(NodeId, NodeId)>> {
    let mut edges = Vec::new();
    for (line_no, line) in numbered_records(reader) {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [u, v] = fields[..] else {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected two node ids, found {} field(s)", fields.len()),
            });
        };
        edges.push((parse_node(u, line_no)?, parse_node(v, line_no)?));
    }
    log::debug!("read {} edge(s)", edges.len());
    Ok(edges)
}

/// Read `node value...` property lines until a blank line or EOF.
///
/// Vector lengths are not checked here; [`crate::Graph::from_edges`]
/// rejects unequal lengths.
pub fn read_properties<R: BufRead>(reader: R) -> Result<BTreeMap<NodeId, Vec<i64>>> {
    let mut properties = BTreeMap::new();
    for (line_no, line) in numbered_records(reader) {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let node = parse_node(first, line_no)?;
        let values = fields
            .map(|field| {
                field.parse::<i64>().map_err(|e| Error::Parse {
                    line: line_no,
                    message: format!("bad property value '{field}': {e}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if properties.insert(node, values).is_some() {
            return Err(Error::Parse {
                line: line_no,
                message: format!("duplicate property record for node {node}"),
            });
        }
    }
    log::debug!("read {} property record(s)", properties.len());
    Ok(properties)
}

/// Lines paired with 1-based numbers, cut at the first blank line.
fn numbered_records<R: BufRead>(reader: R) -> impl Iterator<Item = (usize, Result<String>)> {
    reader
        .lines()
        .map(|line| line.map_err(Error::from))
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .take_while(|(_, line)| !matches!(line, Ok(text) if text.trim().is_empty()))
}

fn parse_node(field: &str, line: usize) -> Result<NodeId> {
    field.parse::<NodeId>().map_err(|e| Error::Parse {
        line,
        message: format!("bad node id '{field}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_edges_stops_at_blank_line() {
        let input = "0 1\n1 2\n  2\t3 \n\n4 5\n";
        let edges = read_edges(Cursor::new(input)).unwrap();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_read_edges_without_trailing_newline() {
        let edges = read_edges(Cursor::new("7 8")).unwrap();
        assert_eq!(edges, vec![(7, 8)]);
        assert!(read_edges(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_edges_rejects_bad_lines() {
        let err = read_edges(Cursor::new("0 1\n0 1 2\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }), "{err}");

        let err = read_edges(Cursor::new("0 -1\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_read_properties() {
        let props = read_properties(Cursor::new("0 1 2 3\n4 1 0 0\n5\n")).unwrap();
        assert_eq!(props[&0], vec![1, 2, 3]);
        assert_eq!(props[&4], vec![1, 0, 0]);
        assert!(props[&5].is_empty());
    }

    #[test]
    fn test_read_properties_errors() {
        let err = read_properties(Cursor::new("0 1\n0 2\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let err = read_properties(Cursor::new("0 x\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
}
