use clap::{Args, ValueEnum};
use itertools::Itertools;
use miette::{miette, Result};
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};
use std::{collections::HashSet, fmt::Display, path::PathBuf};
use swatch_ase::{Color, Document, Group};
use tracing::info;

use super::{format_values, open_document};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    #[default]
    Semantic,
    Full,
}

#[derive(Debug, PartialEq)]
enum Change {
    Added(String, String),
    Removed(String, String),
    Comparison(String, String, String),
    Context(Vec<String>),
    Modified(String, String, Vec<Change>, Vec<Change>),
}

impl Change {
    fn modified(key: &str, name: &str) -> Change {
        Change::Modified(key.into(), name.into(), Vec::new(), Vec::new())
    }

    pub fn with_children(&mut self, children: Vec<Change>) -> Result<()> {
        match self {
            Change::Modified(_, _, vec, _) => {
                vec.extend(children);
                Ok(())
            }
            _ => Err(miette!("tried to add children to an addition or removal")),
        }
    }

    pub fn with_related(&mut self, related: Vec<Change>) -> Result<()> {
        match self {
            Change::Modified(_, _, _, vec) => {
                vec.extend(related);
                Ok(())
            }
            _ => Err(miette!("tried to add related to an addition or removal")),
        }
    }

    /// Section title a child is listed under
    fn heading(&self) -> Option<String> {
        match self {
            Change::Added(key, _) => Some(format!("* {} added:", key)),
            Change::Removed(key, _) => Some(format!("* {} removed:", key)),
            Change::Modified(key, _, _, _) => Some(format!("* {} modified:", key)),
            _ => None,
        }
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| format!("  {}\n", l))
        .collect()
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Change::Added(_, v) => {
                writeln!(f, "✅ {}", v.green())
            }
            Change::Removed(_, v) => {
                writeln!(f, "❌ {}", v.red())
            }
            Change::Comparison(key, old, new) => {
                writeln!(f, "* {}: {} vs {}", key, old.red(), new.green())
            }
            Change::Context(values) => {
                writeln!(f, "{}", values.iter().map(|l| format!(" {}", l)).join("\n"))
            }
            Change::Modified(_, v, children, related) => {
                let mut body = related.iter().map(|c| c.to_string()).join("");

                let sections = children.iter().chunk_by(|c| c.heading());
                for (heading, section) in &sections {
                    if let Some(heading) = heading {
                        body.push_str(&heading);
                        body.push('\n');
                    }
                    for c in section {
                        body.push_str(&indent(&c.to_string()));
                    }
                }

                writeln!(f, "🔃 {}", v.blue())?;
                write!(f, "{}", indent(&body))
            }
        }
    }
}

#[derive(Args)]
pub struct DiffArgs {
    /// An input ASE file
    #[arg(short, long, value_name = "FILE")]
    left: PathBuf,

    /// An input ASE file
    #[arg(short, long, value_name = "FILE")]
    right: PathBuf,

    /// Comparison mode
    #[arg(short, long, value_enum, default_value_t=Mode::Semantic)]
    mode: Mode,
}

impl DiffArgs {
    fn handle_color(&self, left: &Color, right: &Color) -> Option<Change> {
        let mut related = Vec::new();

        if left.model != right.model {
            related.push(Change::Comparison(
                "model".into(),
                left.model.to_string(),
                right.model.to_string(),
            ));
        }

        if left.values != right.values {
            related.push(Change::Comparison(
                "values".into(),
                format_values(left),
                format_values(right),
            ));
        }

        if left.kind != right.kind {
            related.push(Change::Comparison(
                "type".into(),
                left.kind.to_string(),
                right.kind.to_string(),
            ));
        }

        if related.is_empty() {
            None
        } else {
            Some(Change::Modified(
                "colors".into(),
                left.name.clone(),
                Vec::new(),
                related,
            ))
        }
    }

    fn handle_order(&self, left: &[Color], right: &[Color]) -> Option<Change> {
        if self.mode != Mode::Full {
            return None;
        }

        let old = left.iter().map(|c| format!("{}\n", c.name)).join("");
        let new = right.iter().map(|c| format!("{}\n", c.name)).join("");

        let diff = TextDiff::from_lines(&old, &new);
        if diff.ratio() >= 1.0 {
            return None;
        }

        let mut comparison = Vec::new();
        for op in diff.ops().iter() {
            for change in diff.iter_inline_changes(op) {
                let mut context = match change.tag() {
                    ChangeTag::Insert => "+".to_string(),
                    ChangeTag::Delete => "-".to_string(),
                    ChangeTag::Equal => " ".to_string(),
                };
                for (emphasized, value) in change.iter_strings_lossy() {
                    let value = value.trim_end_matches('\n');
                    if emphasized {
                        if change.tag() == ChangeTag::Insert {
                            context.push_str(&format!("{}", value.green().underline()));
                        } else {
                            context.push_str(&format!("{}", value.red().underline()));
                        }
                    } else {
                        context.push_str(&format!("{}", value.dimmed()));
                    }
                }
                comparison.push(context);
            }
        }

        Some(Change::Context(comparison))
    }

    fn handle_colors(&self, left: &[Color], right: &[Color]) -> Vec<Change> {
        let mut result = Vec::new();

        let left_names = left.iter().map(|c| c.name.as_str()).collect::<HashSet<_>>();
        let right_names = right.iter().map(|c| c.name.as_str()).collect::<HashSet<_>>();

        // Find Added Colors
        right
            .iter()
            .map(|c| c.name.as_str())
            .unique()
            .filter(|n| !left_names.contains(n))
            .map(|n| Change::Added("colors".into(), n.to_string()))
            .for_each(|c| result.push(c));

        // Find Removed Colors
        left.iter()
            .map(|c| c.name.as_str())
            .unique()
            .filter(|n| !right_names.contains(n))
            .map(|n| Change::Removed("colors".into(), n.to_string()))
            .for_each(|c| result.push(c));

        // Find Differences, colors sharing a name are compared by their first occurrence
        left.iter()
            .unique_by(|c| c.name.clone())
            .filter_map(|l| {
                right
                    .iter()
                    .find(|r| r.name == l.name)
                    .and_then(|r| self.handle_color(l, r))
            })
            .for_each(|c| result.push(c));

        result
    }

    fn handle_group(&self, left: &Group, right: &Group) -> Result<Option<Change>> {
        let mut result: Option<Change> = None;

        let changes = self.handle_colors(&left.colors, &right.colors);
        if !changes.is_empty() {
            result
                .get_or_insert(Change::modified("groups", &left.name))
                .with_children(changes)?;
        }

        if let Some(order) = self.handle_order(&left.colors, &right.colors) {
            result
                .get_or_insert(Change::modified("groups", &left.name))
                .with_related(vec![order])?;
        }

        Ok(result)
    }

    fn handle_document(
        &self,
        name: &str,
        left: &Document,
        right: &Document,
    ) -> Result<Option<Change>> {
        let mut result: Option<Change> = None;

        if left.header.blocks != right.header.blocks {
            result
                .get_or_insert(Change::modified("ase", name))
                .with_related(vec![Change::Comparison(
                    "blocks".into(),
                    left.header.blocks.to_string(),
                    right.header.blocks.to_string(),
                )])?;
        }

        if let Some(order) = self.handle_order(&left.colors, &right.colors) {
            result
                .get_or_insert(Change::modified("ase", name))
                .with_related(vec![order])?;
        }

        let colors = self.handle_colors(&left.colors, &right.colors);
        if !colors.is_empty() {
            result
                .get_or_insert(Change::modified("ase", name))
                .with_children(colors)?;
        }

        let left_names = left
            .groups
            .iter()
            .map(|g| g.name.as_str())
            .collect::<HashSet<_>>();
        let right_names = right
            .groups
            .iter()
            .map(|g| g.name.as_str())
            .collect::<HashSet<_>>();

        let groups_added: Vec<Change> = right_names
            .iter()
            .copied()
            .filter(|g| !left_names.contains(g))
            .sorted()
            .map(|g| Change::Added("groups".into(), g.to_string()))
            .collect();

        if !groups_added.is_empty() {
            result
                .get_or_insert(Change::modified("ase", name))
                .with_children(groups_added)?;
        }

        let groups_removed: Vec<Change> = left_names
            .iter()
            .copied()
            .filter(|g| !right_names.contains(g))
            .sorted()
            .map(|g| Change::Removed("groups".into(), g.to_string()))
            .collect();

        if !groups_removed.is_empty() {
            result
                .get_or_insert(Change::modified("ase", name))
                .with_children(groups_removed)?;
        }

        for group in left.groups.iter().unique_by(|g| g.name.clone()) {
            let Some(other) = right.group(&group.name) else {
                continue;
            };

            if let Some(c) = self.handle_group(group, other)? {
                result
                    .get_or_insert(Change::modified("ase", name))
                    .with_children(vec![c])?;
            }
        }

        Ok(result)
    }

    pub fn handle(&self) -> Result<()> {
        let left = open_document(&self.left, false)?;
        let right = open_document(&self.right, false)?;

        let difference = self.handle_document(&self.left.to_string_lossy(), &left, &right)?;

        match difference {
            Some(d) => println!("{}", d),
            None => info!("no differences found"),
        }

        Ok(())
    }
}
