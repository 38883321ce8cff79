//! HTML page → [`RawTable`].
//!
//! Reads the first `<table>` of a document. The header is the last row of
//! `<thead>` (stats pages stack an "over header" above the real one); body
//! rows are every other `<tr>` of the table, summary and repeated header
//! rows included. Telling player rows apart is the extractor's job.

use crate::domain::model::{Cell, HeaderCell, Link, RawTable};
use crate::utils::error::{ReportError, Result};
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ReportError::HtmlParseError {
        message: format!("invalid selector '{}': {:?}", css, e),
    })
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn inside_thead(row: ElementRef<'_>) -> bool {
    row.ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|el| el.name() == "thead")
}

/// Parses the first table of `html`; `Ok(None)` when the page has no table.
pub fn parse_first_table(html: &str) -> Result<Option<RawTable>> {
    let table_sel = selector("table")?;
    let header_row_sel = selector("thead tr")?;
    let header_cell_sel = selector("th")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("th, td")?;
    let link_sel = selector("a")?;

    let document = Html::parse_document(html);
    let Some(table) = document.select(&table_sel).next() else {
        return Ok(None);
    };

    let header = table
        .select(&header_row_sel)
        .last()
        .map(|row| {
            row.select(&header_cell_sel)
                .map(|th| HeaderCell {
                    key: th.value().attr("data-stat").map(str::to_string),
                    text: element_text(th),
                })
                .collect()
        })
        .unwrap_or_default();

    let rows = table
        .select(&row_sel)
        .filter(|row| !inside_thead(*row))
        .map(|row| {
            row.select(&cell_sel)
                .map(|cell| Cell {
                    text: element_text(cell),
                    link: cell.select(&link_sel).next().map(|a| Link {
                        href: a.value().attr("href").unwrap_or_default().to_string(),
                        text: element_text(a),
                    }),
                })
                .collect()
        })
        .collect();

    Ok(Some(RawTable { header, rows }))
}
