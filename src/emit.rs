use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::group;
use crate::record::WordRecord;

pub fn json_file_name(key: char) -> String {
    format!("words_{}.json", key.to_ascii_lowercase())
}

pub fn page_file_name(key: char) -> String {
    format!("{}.md", key.to_ascii_lowercase())
}

fn stub_page(key: char) -> String {
    let lower = key.to_ascii_lowercase();
    format!(
        "---\ntitle: 以 {key} 开头的单词\n---\n\n# 以 {key} 开头的单词\n\n<WordList letter=\"{lower}\" />\n"
    )
}

/// Write one pretty-printed JSON artifact plus one stub page per bucket
/// and return the page paths in sidebar order.
pub fn emit_groups(
    groups: &BTreeMap<char, Vec<WordRecord>>,
    json_dir: &Path,
    pages_dir: &Path,
) -> Result<Vec<String>> {
    fs::create_dir_all(json_dir).with_context(|| format!("creating {}", json_dir.display()))?;
    fs::create_dir_all(pages_dir).with_context(|| format!("creating {}", pages_dir.display()))?;

    let mut sidebar = Vec::new();
    for key in group::ordered_keys(groups) {
        let entries = &groups[&key];

        let json_path = json_dir.join(json_file_name(key));
        let body = serde_json::to_string_pretty(entries)?;
        fs::write(&json_path, body)
            .with_context(|| format!("writing {}", json_path.display()))?;
        println!("Generated {} with {} words.", json_path.display(), entries.len());

        let page_path = pages_dir.join(page_file_name(key));
        fs::write(&page_path, stub_page(key))
            .with_context(|| format!("writing {}", page_path.display()))?;

        sidebar.push(format!("/words/{}", page_file_name(key)));
    }
    Ok(sidebar)
}

/// Ready-to-paste sidebar block for the site configuration.
pub fn print_sidebar_config(entries: &[String]) {
    println!("\nSidebar entries for the word pages:");
    println!("{{");
    println!("  text: '单词列表',");
    println!("  collapsible: true,");
    println!("  children: [");
    for entry in entries {
        println!("    '{}',", entry);
    }
    println!("  ]");
    println!("}}");
}
