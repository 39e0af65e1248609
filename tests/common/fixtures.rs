//! Static sheet contents and helpers that write them to disk.
//!
//! Rows are plain strings. The xlsx writer stores anything that parses as a
//! number as a numeric cell, the way a spreadsheet user would have typed it.

use std::path::{Path, PathBuf};

/// Header row of the yes/no flag layout, with deliberately messy casing.
pub const FLAG_HEADERS: &[&str] = &[
    "Slug",
    "Name",
    "Price",
    "Sales Price",
    "Image",
    "Description",
    "Bullet Points",
    "Contact Us",
    "Payment",
];

/// Rows under [`FLAG_HEADERS`]: four listings, one echoed header, one blank row.
pub const FLAG_ROWS: &[&[&str]] = &[
    &[
        "web-design",
        " Web Design ",
        "$1,200",
        "999.5",
        "/img/web.jpg",
        "Custom sites.",
        "Fast;Reliable; ;",
        "Yes",
        "no",
    ],
    &[
        "seo-audit",
        "SEO Audit",
        "250",
        "",
        "https://youtu.be/abc123",
        "Find what is holding you back.",
        "",
        "n",
        "YES",
    ],
    &["Slug", "Name", "Price", "", "", "", "", "", ""],
    &[
        "hosting",
        "Hosting",
        "NA",
        "abc",
        "/video/hosting.mp4",
        "",
        "Daily backups",
        "y",
        "1",
    ],
    &["", "", "", "", "", "", "", "", ""],
    &["consulting", "Consulting", "", "", "", "", "", "", ""],
];

/// Slugs expected from [`FLAG_ROWS`], in order.
pub const FLAG_SLUGS: &[&str] = &["web-design", "seo-audit", "hosting", "consulting"];

/// Header row of the free-form action layout.
pub const FREE_FORM_HEADERS: &[&str] = &[
    "slug",
    "name",
    "price",
    "sale price",
    "image",
    "description",
    "bullet points",
    "Action Type",
    "ContactLink",
    "checkout link",
];

pub const FREE_FORM_ROWS: &[&[&str]] = &[
    &[
        "branding",
        "Branding",
        "500",
        "450",
        "/img/brand.png",
        "Logo and palette.",
        "Logo;Palette",
        " Both ",
        "/contact?s=branding",
        "https://pay.example.com/branding",
    ],
    &[
        "retainer",
        "Retainer",
        "",
        "",
        "",
        "",
        "",
        "CONTACT",
        " /contact ",
        "",
    ],
];

/// Write a CSV file with every field quoted.
pub fn write_csv(dir: &Path, name: &str, headers: &[&str], rows: &[&[&str]]) -> PathBuf {
    let quote = |s: &str| format!("\"{}\"", s.replace('"', "\"\""));
    let mut text = String::new();
    for line in std::iter::once(headers).chain(rows.iter().copied()) {
        let fields: Vec<String> = line.iter().map(|f| quote(f)).collect();
        text.push_str(&fields.join(","));
        text.push('\n');
    }
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write csv fixture");
    path
}

/// Write an `.xlsx` workbook. `sheets` is `(sheet name, header, rows)`; the
/// first entry becomes the first worksheet.
pub fn write_xlsx(dir: &Path, name: &str, sheets: &[(&str, &[&str], &[&[&str]])]) -> PathBuf {
    use rust_xlsxwriter::Workbook;

    let mut workbook = Workbook::new();
    for (sheet_name, headers, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*sheet_name).expect("sheet name");
        for (col, header) in headers.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, *header)
                .expect("write header");
        }
        for (r, row) in rows.iter().enumerate() {
            let r = (r + 1) as u32;
            for (col, value) in row.iter().enumerate() {
                let col = col as u16;
                if value.is_empty() {
                    continue;
                }
                match value.parse::<f64>() {
                    Ok(n) => worksheet.write_number(r, col, n).expect("write number"),
                    Err(_) => worksheet.write_string(r, col, *value).expect("write string"),
                };
            }
        }
    }
    let path = dir.join(name);
    workbook.save(&path).expect("save xlsx fixture");
    path
}

/// Read a written output file back as JSON.
pub fn read_output(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("read output");
    serde_json::from_str(&text).expect("output is valid JSON")
}
