//! HTML rendering for the form and the trades table.
//!
//! Pages are small enough to build as strings; every interpolated value goes
//! through `escape`.

use std::fmt::Write as _;

use crate::trades::{Asset, TradeRow};

/// Values echoed back into the form.
#[derive(Debug, Clone, Default)]
pub struct FormState<'a> {
    pub username: &'a str,
    pub season: Option<&'a str>,
    pub rounds: Option<&'a str>,
}

/// Outcome shown below the form.
#[derive(Debug)]
pub enum PageBody<'a> {
    Empty,
    Error(&'a str),
    Trades(&'a [TradeRow]),
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left;vertical-align:top}\
th{cursor:pointer;background:#f3f3f3}\
ul{margin:0;padding-left:1.1rem}\
.error{color:#b00020}";

// Click a header to sort by that column; the date column sorts on its timestamp.
const SORT_SCRIPT: &str = "document.querySelectorAll('th').forEach(function(th,i){\
th.addEventListener('click',function(){\
var tb=th.closest('table').tBodies[0];var asc=th.dataset.asc!=='1';th.dataset.asc=asc?'1':'0';\
var key=function(r){var c=r.cells[i];return c.dataset.sort||c.textContent.trim();};\
Array.from(tb.rows).sort(function(a,b){var x=key(a),y=key(b);\
var n=(+x)-(+y);var d=isNaN(n)?x.localeCompare(y):n;return asc?d:-d;})\
.forEach(function(r){tb.appendChild(r);});});});";

fn asset_list(assets: &[Asset]) -> String {
    if assets.is_empty() {
        return "&mdash;".to_string();
    }
    let mut out = String::from("<ul>");
    for asset in assets {
        let _ = write!(out, "<li>{}</li>", escape(&asset.label()));
    }
    out.push_str("</ul>");
    out
}

fn trades_table(rows: &[TradeRow]) -> String {
    if rows.is_empty() {
        return "<p>No trades found.</p>".to_string();
    }

    let mut out = String::from(
        "<table><thead><tr><th>Date</th><th>League</th><th>With</th>\
         <th>Lost</th><th>Gained</th></tr></thead><tbody>",
    );
    for row in rows {
        let _ = write!(
            out,
            "<tr><td data-sort=\"{}\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.timestamp_ms.unwrap_or_default(),
            row.date_label(),
            escape(&row.league_name),
            escape(&row.counterparties.join(", ")),
            asset_list(&row.lost),
            asset_list(&row.gained),
        );
    }
    out.push_str("</tbody></table>");
    let _ = write!(out, "<script>{}</script>", SORT_SCRIPT);
    out
}

/// Full HTML page: form plus an optional result section.
pub fn page(form: &FormState<'_>, body: PageBody<'_>) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <title>Sleeper Trades</title><style>{}</style></head><body>\
         <h1>Sleeper Trades</h1>\
         <form action=\"/trades\" method=\"get\">\
         <label>Username <input name=\"username\" value=\"{}\" required></label> \
         <label>Season <input name=\"season\" value=\"{}\" size=\"6\"></label> \
         <label>Rounds <input name=\"rounds\" value=\"{}\" placeholder=\"1-18\" size=\"8\"></label> \
         <button type=\"submit\">Show trades</button></form>",
        STYLE,
        escape(form.username),
        escape(form.season.unwrap_or_default()),
        escape(form.rounds.unwrap_or_default()),
    );

    match body {
        PageBody::Empty => {}
        PageBody::Error(message) => {
            let _ = write!(out, "<p class=\"error\">{}</p>", escape(message));
        }
        PageBody::Trades(rows) => {
            let _ = write!(
                out,
                "<h2>Trades for {} ({})</h2>{}",
                escape(form.username),
                rows.len(),
                trades_table(rows)
            );
        }
    }

    out.push_str("</body></html>");
    out
}
