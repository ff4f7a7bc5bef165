use std::io::{self, Write};

use crate::models::{FileNode, ScanStats};

/// Write `nodes` as an ASCII tree, folders suffixed with `/`.
pub fn write_tree<W: Write>(writer: &mut W, nodes: &[FileNode]) -> io::Result<()> {
    write_children_inner(writer, nodes, &[])
}

pub fn write_summary<W: Write>(writer: &mut W, stats: &ScanStats) -> io::Result<()> {
    write!(writer, "\n{} scanned, {} ignored", stats.scanned, stats.ignored)?;
    if stats.unreadable > 0 {
        write!(writer, ", {} unreadable", stats.unreadable)?;
    }
    writer.write_all(b"\n")
}

fn write_children_inner<W: Write>(
    writer: &mut W,
    children: &[FileNode],
    ancestor_has_more: &[bool],
) -> io::Result<()> {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        for &has_more in ancestor_has_more {
            if has_more {
                writer.write_all(b"|   ")?;
            } else {
                writer.write_all(b"    ")?;
            }
        }

        if is_last {
            writer.write_all(b"`-- ")?;
        } else {
            writer.write_all(b"|-- ")?;
        }

        writer.write_all(node.name.as_bytes())?;
        if node.is_folder() {
            writer.write_all(b"/")?;
        }
        writer.write_all(b"\n")?;

        if !node.children().is_empty() {
            let mut next_ancestor_has_more = ancestor_has_more.to_vec();
            next_ancestor_has_more.push(!is_last);
            write_children_inner(writer, node.children(), &next_ancestor_has_more)?;
        }
    }

    Ok(())
}
