//! Spreadsheet export for the user table.
//!
//! Builds a minimal OOXML workbook (an `.xlsx` is a zip archive of fixed XML
//! parts) entirely in memory. The caller hands in the filtered,
//! non-paginated record set; pagination never affects what gets exported.

mod error;
mod xml;

pub use error::{ExportError, Result};

use std::io::{Cursor, Write};

use chrono::{DateTime, FixedOffset, Utc};
use ud_core::User;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Default artifact name offered to the operator.
pub const EXPORT_FILE_NAME: &str = "UserList.xlsx";

pub const SHEET_NAME: &str = "Users";

/// Fixed column order. There is deliberately no password column.
pub const HEADERS: [&str; 11] = [
    "#",
    "ID",
    "Username",
    "Email",
    "PhoneNumber",
    "FirstName",
    "LastName",
    "Role",
    "Avatar",
    "Create At",
    "Last Update",
];

/// Timestamps render as wall time in this fixed offset (UTC+07:00, the
/// deployment's home timezone), so exports are deterministic everywhere.
const EXPORT_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Serialize `records` into workbook bytes: one `Users` sheet, a header row,
/// and one data row per record. Read-only over its input - triggering an
/// export never touches table state.
pub fn workbook(records: &[User]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml().as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(WORKBOOK_RELS_XML.as_bytes())?;

    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(sheet_xml(records).as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn sheet_xml(records: &[User]) -> String {
    let mut rows = String::new();

    rows.push_str("<row>");
    for header in HEADERS {
        push_text_cell(&mut rows, header);
    }
    rows.push_str("</row>");

    for user in records {
        rows.push_str("<row>");
        push_number_cell(&mut rows, user.display_index);
        push_text_cell(&mut rows, &user.id);
        push_text_cell(&mut rows, &user.username);
        push_text_cell(&mut rows, &user.email);
        push_text_cell(&mut rows, &user.phone_number);
        push_text_cell(&mut rows, &user.first_name);
        push_text_cell(&mut rows, &user.last_name);
        push_text_cell(&mut rows, &user.role.display_name());
        push_text_cell(&mut rows, user.avatar_url.as_deref().unwrap_or(""));
        push_text_cell(&mut rows, &format_timestamp(&user.created_at));
        push_text_cell(&mut rows, &format_timestamp(&user.updated_at));
        rows.push_str("</row>");
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
         <sheetData>{rows}</sheetData></worksheet>"
    )
}

/// Inline-string cell; no shared-strings part needed.
fn push_text_cell(rows: &mut String, value: &str) {
    rows.push_str("<c t=\"inlineStr\"><is><t>");
    rows.push_str(&xml::escape(value));
    rows.push_str("</t></is></c>");
}

fn push_number_cell(rows: &mut String, value: u32) {
    rows.push_str("<c><v>");
    rows.push_str(&value.to_string());
    rows.push_str("</v></c>");
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    // +07:00 is always a representable offset.
    let offset = FixedOffset::east_opt(EXPORT_UTC_OFFSET_SECS).unwrap();
    timestamp
        .with_timezone(&offset)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

fn workbook_xml() -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
         <sheets><sheet name=\"{}\" sheetId=\"1\" r:id=\"rId1\"/></sheets></workbook>",
        xml::escape(SHEET_NAME)
    )
}

const CONTENT_TYPES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
    <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
    <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
    <Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
    <Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
    </Types>";

const ROOT_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
    <Relationship Id=\"rId1\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" \
    Target=\"xl/workbook.xml\"/></Relationships>";

const WORKBOOK_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
    <Relationship Id=\"rId1\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" \
    Target=\"worksheets/sheet1.xml\"/></Relationships>";

#[cfg(test)]
mod tests;
