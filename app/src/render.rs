//! Plain-text rendering for the three screens.
//!
//! Rendering writes to any `Write`, so scripted sessions can capture and
//! assert on screen output. Nothing here mutates state.

use std::io::{self, Write};

use todo_core::screen::{DetailsScreen, FormScreen, ListScreen};
use todo_core::Field;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_LIST: &str = "No todos available.";

/// Human label for a form field, used next to its error message.
fn field_label(field: Field) -> &'static str {
    match field {
        Field::Title => "Title",
        Field::Details => "Details",
        Field::Status => "Status",
    }
}

pub fn list(out: &mut impl Write, screen: &ListScreen) -> io::Result<()> {
    let query = screen.query();
    let status = query
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "all".to_string());
    let search = if query.search.trim().is_empty() {
        "-".to_string()
    } else {
        query.search.trim().to_string()
    };
    let sort = query.sort.as_str().unwrap_or("default");
    let order = query.order.as_str();

    writeln!(out)?;
    writeln!(out, "Todos  [status: {status} | search: {search} | sort: {sort} | order: {order}]")?;

    if screen.todos().is_empty() {
        writeln!(out, "{EMPTY_LIST}")?;
        return Ok(());
    }

    let headers = vec!["#".to_string(), "Title".to_string(), "Status".to_string()];
    let rows: Vec<Vec<String>> = screen
        .todos()
        .iter()
        .enumerate()
        .map(|(idx, todo)| {
            vec![
                (idx + 1).to_string(),
                todo.title.clone(),
                todo.status.to_string(),
            ]
        })
        .collect();
    write_table(out, headers, rows)
}

pub fn details(out: &mut impl Write, screen: &DetailsScreen) -> io::Result<()> {
    let todo = screen.todo();
    writeln!(out)?;
    writeln!(out, "Title: {}", todo.title)?;
    writeln!(out, "Status: {}", todo.status)?;
    writeln!(out, "Details: {}", todo.details)?;
    Ok(())
}

pub fn form(out: &mut impl Write, screen: &FormScreen) -> io::Result<()> {
    let values = screen.values();
    let status = values
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    writeln!(out)?;
    writeln!(out, "{}", if screen.is_editing() { "Edit todo" } else { "New todo" })?;
    writeln!(out, "  Title:   {}", values.title)?;
    writeln!(out, "  Details: {}", values.details)?;
    writeln!(out, "  Status:  {status}")?;
    for error in screen.visible_errors() {
        writeln!(out, "  ! {}: {}", field_label(error.field), error.message)?;
    }
    Ok(())
}

fn write_table<W: Write>(mut writer: W, headers: Vec<String>, rows: Vec<Vec<String>>) -> io::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    for idx in 0..column_count {
        write!(writer, "{:width$} ", headers[idx], width = widths[idx])?;
    }
    writeln!(writer)?;

    for idx in 0..column_count {
        write!(writer, "{:-<width$} ", "", width = widths[idx])?;
    }
    writeln!(writer)?;

    for row in rows {
        for idx in 0..column_count {
            let cell = &row[idx];
            let padding = widths[idx].saturating_sub(UnicodeWidthStr::width(cell.as_str()));
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{FormScreen, HttpResponse, ListScreen, TodoClient};

    fn populated(body: &str) -> ListScreen {
        let client = TodoClient::new("http://localhost:3000");
        let mut screen = ListScreen::new();
        screen
            .apply_refresh(
                &client,
                Ok(HttpResponse {
                    status: 200,
                    headers: Vec::new(),
                    body: body.to_string(),
                }),
            )
            .unwrap();
        screen
    }

    fn rendered(screen: &ListScreen) -> String {
        let mut out = Vec::new();
        list(&mut out, screen).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_list_shows_the_empty_message() {
        let screen = ListScreen::new();
        let text = rendered(&screen);
        assert!(text.contains(EMPTY_LIST));
        assert!(text.contains("status: all"));
    }

    #[test]
    fn list_rows_are_numbered() {
        let screen = populated(
            r#"{"data":[{"id":"00000000-0000-0000-0000-000000000001","title":"Buy milk","details":"2%","status":"not started"}]}"#,
        );
        let text = rendered(&screen);
        assert!(text.contains("1 Buy milk"));
        assert!(text.contains("not started"));
    }

    #[test]
    fn form_errors_carry_field_labels() {
        let mut form_screen = FormScreen::create();
        form_screen.set_title("ab");
        let mut out = Vec::new();
        form(&mut out, &form_screen).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("! Title: Title is too short"));
    }
}
