use crate::{EXPORT_FILE_NAME, HEADERS, SHEET_NAME, workbook};

use std::io::{Cursor, Read};

use chrono::{TimeZone, Utc};
use ud_core::{Role, User, assign_display_indices};

fn sample_user(id: &str, email: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        username: format!("user-{id}"),
        email: email.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone_number: "0911222333".to_string(),
        role,
        avatar_url: Some("https://img.example.com/a.png".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 2, 17, 30, 5).unwrap(),
        display_index: 0,
    }
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn test_workbook_contains_all_required_parts() {
    let bytes = workbook(&[]).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/worksheets/sheet1.xml",
    ] {
        assert!(names.iter().any(|n| n == part), "missing part {part}");
    }
}

#[test]
fn test_sheet_is_named_users() {
    let bytes = workbook(&[]).unwrap();
    let workbook_xml = read_part(&bytes, "xl/workbook.xml");

    assert!(workbook_xml.contains(&format!("name=\"{SHEET_NAME}\"")));
}

#[test]
fn test_one_row_per_record_plus_header() {
    let mut users = vec![
        sample_user("u1", "a@example.com", Role::Admin),
        sample_user("u2", "b@example.com", Role::User),
        sample_user("u3", "c@example.com", Role::Editor),
    ];
    assign_display_indices(&mut users);

    let bytes = workbook(&users).unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert_eq!(sheet.matches("<row>").count(), users.len() + 1);
}

#[test]
fn test_header_order_is_fixed_and_has_no_password_column() {
    let bytes = workbook(&[]).unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    // Headers appear in declared order.
    let mut last_position = 0;
    for header in HEADERS {
        let position = sheet.find(&format!("<t>{header}</t>")).unwrap();
        assert!(position >= last_position, "header {header} out of order");
        last_position = position;
    }

    assert!(!sheet.contains("Password"));
}

#[test]
fn test_role_is_rendered_capitalized() {
    let mut users = vec![sample_user("u1", "a@example.com", Role::Admin)];
    assign_display_indices(&mut users);

    let sheet = read_part(&workbook(&users).unwrap(), "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<t>Admin</t>"));
    assert!(!sheet.contains("<t>admin</t>"));
}

#[test]
fn test_timestamps_render_in_fixed_offset() {
    // 2024-01-01T00:00:00Z is 07:00 wall time at UTC+07:00.
    let mut users = vec![sample_user("u1", "a@example.com", Role::User)];
    assign_display_indices(&mut users);

    let sheet = read_part(&workbook(&users).unwrap(), "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<t>01/01/2024 07:00:00</t>"));
    assert!(sheet.contains("<t>03/06/2024 00:30:05</t>"));
}

#[test]
fn test_display_index_is_written_as_number() {
    let mut users = vec![
        sample_user("u1", "a@example.com", Role::User),
        sample_user("u2", "b@example.com", Role::User),
    ];
    assign_display_indices(&mut users);

    let sheet = read_part(&workbook(&users).unwrap(), "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<c><v>1</v></c>"));
    assert!(sheet.contains("<c><v>2</v></c>"));
}

#[test]
fn test_special_characters_are_escaped() {
    let mut users = vec![User {
        first_name: "A & B <C>".to_string(),
        ..sample_user("u1", "a@example.com", Role::User)
    }];
    assign_display_indices(&mut users);

    let sheet = read_part(&workbook(&users).unwrap(), "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("A &amp; B &lt;C&gt;"));
    assert!(!sheet.contains("A & B <C>"));
}

#[test]
fn test_export_covers_filtered_set_regardless_of_pagination() {
    // Twelve records, seven matching the filter. The export consumes the
    // filtered set - page size and current page never change the row count.
    let mut users: Vec<User> = (1..=12)
        .map(|n| {
            let domain = if n <= 7 { "match.com" } else { "other.org" };
            sample_user(&format!("u{n:02}"), &format!("u{n}@{domain}"), Role::User)
        })
        .collect();
    assign_display_indices(&mut users);

    let filtered = ud_table::filter(&users, "match.com", None);
    let page = ud_table::paginate(&filtered, 5, 1);
    assert_eq!(page.records.len(), 5);

    let sheet = read_part(&workbook(&filtered).unwrap(), "xl/worksheets/sheet1.xml");

    assert_eq!(sheet.matches("<row>").count(), 7 + 1);
}

#[test]
fn test_default_file_name() {
    assert_eq!(EXPORT_FILE_NAME, "UserList.xlsx");
}
