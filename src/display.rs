use crate::binary::extract_command_name;
use colored::*;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryInfo {
    pub name: String,
    pub full_path: PathBuf,
}

/// Keeps the first path seen for every logical command name.
pub fn process_binaries<P: AsRef<Path>>(binary_paths: &[P]) -> Vec<BinaryInfo> {
    let mut result = Vec::new();
    let mut seen = HashSet::new();

    for path in binary_paths {
        let path: &Path = path.as_ref();
        let name = extract_command_name(path);
        if !seen.insert(name.clone()) {
            continue;
        }
        result.push(BinaryInfo {
            name,
            full_path: path.to_path_buf(),
        });
    }
    result
}

pub fn format_binary_info(info: &BinaryInfo) -> String {
    format!("  - {} ({})", info.name.cyan(), info.full_path.display())
}

pub fn write_binaries<W: Write>(out: &mut W, binaries: &[BinaryInfo]) -> io::Result<()> {
    if binaries.is_empty() {
        return writeln!(out, "No subcommand binaries found.");
    }

    writeln!(out, "{}", "Available subcommands:".bold())?;
    for info in binaries {
        writeln!(out, "{}", format_binary_info(info))?;
    }
    Ok(())
}

pub fn print_binary_paths<P: AsRef<Path>>(binary_paths: &[P]) -> io::Result<()> {
    let binaries = process_binaries(binary_paths);
    write_binaries(&mut io::stdout().lock(), &binaries)
}
