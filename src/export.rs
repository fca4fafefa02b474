//! Diagram export of tree shapes to `tikz-qtree` notation.
//!
//! Trees are written pre-order as nested bracketed groups, `[.{root} left right ]`. Leaves are
//! written as a bare `{label}`. When exactly one child is present, the missing one is written as
//! an invisible placeholder so that the drawn child keeps its side.

use crate::avl_tree::NodeProxy;
use crate::error::Result;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const MISSING_CHILD: &str = "\\edge[draw=none]; {}";

/// Options controlling the LaTeX document produced by `write_document`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TexOptions {
    /// Wraps the picture in a compilable `standalone` document with its package imports.
    pub standalone: bool,
    /// Vertical distance between levels, as a TikZ length such as `"1.5cm"`.
    pub level_distance: Option<String>,
    /// Horizontal distance between siblings, as a TikZ length such as `"8pt"`.
    pub sibling_distance: Option<String>,
}

impl Default for TexOptions {
    fn default() -> Self {
        TexOptions {
            standalone: true,
            level_distance: None,
            sibling_distance: None,
        }
    }
}

impl TexOptions {
    fn picture_options(&self) -> String {
        let options: Vec<String> = self
            .level_distance
            .iter()
            .map(|distance| format!("level distance={}", distance))
            .chain(self.sibling_distance.iter().map(|distance| format!("sibling distance={}", distance)))
            .collect();
        if options.is_empty() {
            String::new()
        } else {
            format!("[{}]", options.join(", "))
        }
    }
}

fn write_subtree<P, W>(proxy: &P, writer: &mut W) -> io::Result<()>
where
    P: NodeProxy,
    P::Value: Display,
    W: Write,
{
    let value = match proxy.value() {
        Some(value) => value,
        None => return Ok(()),
    };

    let children = [proxy.left(), proxy.right()];
    if children.iter().all(|child| !child.is_valid()) {
        return write!(writer, "{{{}}}", value);
    }

    write!(writer, "[.{{{}}} ", value)?;
    for child in &children {
        if child.is_valid() {
            write_subtree(child, writer)?;
        } else {
            write!(writer, "{}", MISSING_CHILD)?;
        }
        write!(writer, " ")?;
    }
    write!(writer, "]")
}

/// Writes the `\Tree` command describing the subtree under `proxy`. An empty subtree is written
/// as a TeX comment.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlSet;
/// use avl_collections::export;
///
/// let set: AvlSet<u32> = (1..4).collect();
/// let mut out = Vec::new();
/// export::write_qtree(&set.cursor(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "\\Tree [.{2} {1} {3} ]\n");
/// ```
pub fn write_qtree<P, W>(proxy: &P, writer: &mut W) -> Result<()>
where
    P: NodeProxy,
    P::Value: Display,
    W: Write,
{
    if !proxy.is_valid() {
        writeln!(writer, "% empty tree")?;
        return Ok(());
    }

    write!(writer, "\\Tree ")?;
    write_subtree(proxy, writer)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes a `tikzpicture` of the subtree under `proxy`, wrapped in a full document if
/// `options.standalone` is set.
pub fn write_document<P, W>(proxy: &P, writer: &mut W, options: &TexOptions) -> Result<()>
where
    P: NodeProxy,
    P::Value: Display,
    W: Write,
{
    debug!("exporting tree of height {}", proxy.height());
    if options.standalone {
        writeln!(writer, "\\documentclass{{standalone}}")?;
        writeln!(writer, "\\usepackage{{tikz}}")?;
        writeln!(writer, "\\usepackage{{tikz-qtree}}")?;
        writeln!(writer, "\\begin{{document}}")?;
    }
    writeln!(writer, "\\begin{{tikzpicture}}{}", options.picture_options())?;
    write_qtree(proxy, writer)?;
    writeln!(writer, "\\end{{tikzpicture}}")?;
    if options.standalone {
        writeln!(writer, "\\end{{document}}")?;
    }
    Ok(())
}

/// Creates or truncates the file at `path` and writes the document for `proxy` to it.
pub fn write_file<P, Q>(proxy: &P, path: Q, options: &TexOptions) -> Result<()>
where
    P: NodeProxy,
    P::Value: Display,
    Q: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_document(proxy, &mut writer, options)?;
    writer.flush()?;
    info!("wrote tree diagram to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_document, write_qtree, TexOptions};
    use crate::avl_tree::AvlSet;

    fn qtree(set: &AvlSet<u32>) -> String {
        let mut out = Vec::new();
        write_qtree(&set.cursor(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty() {
        let set = AvlSet::new();
        assert_eq!(qtree(&set), "% empty tree\n");
    }

    #[test]
    fn test_single() {
        let set = AvlSet::from_value(7);
        assert_eq!(qtree(&set), "\\Tree {7}\n");
    }

    #[test]
    fn test_missing_child_placeholder() {
        let set: AvlSet<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(qtree(&set), "\\Tree [.{2} {1} \\edge[draw=none]; {} ]\n");

        let set: AvlSet<u32> = vec![2, 3].into_iter().collect();
        assert_eq!(qtree(&set), "\\Tree [.{2} \\edge[draw=none]; {} {3} ]\n");
    }

    #[test]
    fn test_pre_order() {
        let set: AvlSet<u32> = (1..8).collect();
        assert_eq!(
            qtree(&set),
            "\\Tree [.{4} [.{2} {1} {3} ] [.{6} {5} {7} ] ]\n",
        );
    }

    #[test]
    fn test_document() {
        let set: AvlSet<u32> = (1..4).collect();
        let options = TexOptions {
            standalone: true,
            level_distance: Some(String::from("1cm")),
            sibling_distance: Some(String::from("4pt")),
        };
        let mut out = Vec::new();
        write_document(&set.cursor(), &mut out, &options).unwrap();
        let document = String::from_utf8(out).unwrap();

        assert!(document.starts_with("\\documentclass{standalone}\n"));
        assert!(document.contains("\\begin{tikzpicture}[level distance=1cm, sibling distance=4pt]\n"));
        assert!(document.contains("\\Tree [.{2} {1} {3} ]\n"));
        assert!(document.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_fragment() {
        let set: AvlSet<u32> = (1..4).collect();
        let options = TexOptions {
            standalone: false,
            ..TexOptions::default()
        };
        let mut out = Vec::new();
        write_document(&set.cursor(), &mut out, &options).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\\begin{tikzpicture}\n\\Tree [.{2} {1} {3} ]\n\\end{tikzpicture}\n",
        );
    }
}
