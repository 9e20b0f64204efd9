//! Pure rendering of populated table groups into book pages.
//!
//! Output is GitBook-flavored markdown: `README.md` is the table of contents,
//! `SUMMARY.md` is the navigation manifest, and every group gets its own
//! detail page. Rendering never fails; missing optional data (comments,
//! columns, the create statement) renders as-is or falls back to a fixed
//! placeholder.

use std::collections::BTreeMap;

use crate::group::TableGroup;

/// Shown on a detail page when the table carries no comment. The table of
/// contents still links with the logical name in that case.
const EMPTY_COMMENT_PLACEHOLDER: &str = "请添加注释";

/// A rendered page, ready to be written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub filename: String,
    pub content: String,
}

/// Render the whole book. Pages come out in a fixed order: one detail page per
/// group (lexicographic by logical name), then `SUMMARY.md`, then `README.md`.
pub fn render(groups: &BTreeMap<String, TableGroup>) -> Vec<Page> {
    let mut pages = Vec::with_capacity(groups.len() + 2);
    let mut readme = String::from("### 目录 \n\n");
    let mut summary = String::from("* [目录](README.md)\n");

    for group in groups.values() {
        let filename = format!("{}.md", group.name);

        let link_label = if group.comment.is_empty() {
            &group.name
        } else {
            &group.comment
        };
        let bullet = format!("* [{link_label}]({filename})\n");
        readme.push_str(&bullet);
        summary.push_str("    ");
        summary.push_str(&bullet);

        pages.push(Page {
            content: table_page(group),
            filename,
        });
    }

    pages.push(Page {
        filename: "SUMMARY.md".to_string(),
        content: summary,
    });
    pages.push(Page {
        filename: "README.md".to_string(),
        content: readme,
    });
    pages
}

fn table_page(group: &TableGroup) -> String {
    let comment = if group.comment.is_empty() {
        EMPTY_COMMENT_PLACEHOLDER
    } else {
        &group.comment
    };

    let mut page = format!("## {}\n", group.name);
    page.push_str(&format!("\t{comment}\n"));
    page.push_str(&format!("\t 共{}张表\n\n", group.count));

    page.push_str("### 表结构说明 \n\n");
    page.push_str("|Field|Type|Key|Default|Null|Comment|Extra\n");
    page.push_str("|-----|----|---|-------|----|---|-----\n");
    for column in &group.columns {
        page.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {}\n",
            column.field,
            column.data_type,
            column.key,
            column.default_value,
            column.null,
            column.comment,
            column.extra,
        ));
    }
    page.push('\n');

    page.push_str("### sql语句 \n\n");
    page.push_str("```sql\n");
    page.push_str(&group.create_sql);
    page.push_str("\n```");
    page
}
