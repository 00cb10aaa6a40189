use std::io::{self, Write};

use catalog_core::{data::User, Catalog, FilterState, Listing, ViewRecord};

pub const NO_MATCHES: &str = "No products matching selected criteria";

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// Writes the filter panel followed by the visible products.
pub fn page(out: &mut impl Write, catalog: &mut Catalog) -> io::Result<()> {
    owner_tabs(out, catalog.owners(), catalog.filter())?;
    search_line(out, catalog.filter())?;
    writeln!(out)?;
    match catalog.visible() {
        Listing::Rows(rows) => table(out, &rows),
        Listing::NoMatches => writeln!(out, "{NO_MATCHES}"),
    }
}

// The active tab is shown in brackets.
fn owner_tabs(out: &mut impl Write, owners: &[User], filter: &FilterState) -> io::Result<()> {
    let mut tabs = vec![tab("All", filter.is_all_owners())];
    tabs.extend(owners.iter().map(|user| tab(&user.name, filter.is_owner_selected(user.id))));
    writeln!(out, "Owners: {}", tabs.join(" "))
}

fn tab(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}

fn search_line(out: &mut impl Write, filter: &FilterState) -> io::Result<()> {
    if filter.has_search() {
        writeln!(out, "Search: {:?}  (type `clear` to remove)", filter.search_text())
    } else {
        writeln!(out, "Search:")
    }
}

fn cells(record: &ViewRecord) -> [String; 4] {
    [
        record.id.0.to_string(),
        record.name.clone(),
        record.category.as_ref().map(|category| category.label()).unwrap_or_default(),
        record
            .user
            .as_ref()
            .map(|user| format!("{} ({})", user.name, user.sex.code()))
            .unwrap_or_default(),
    ]
}

fn table(out: &mut impl Write, rows: &[ViewRecord]) -> io::Result<()> {
    let rows: Vec<_> = rows.iter().map(cells).collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &widths, HEADERS.iter().copied())?;
    let rule: Vec<_> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(out, &widths, rule.iter().map(String::as_str))?;
    for row in &rows {
        write_row(out, &widths, row.iter().map(String::as_str))?;
    }
    Ok(())
}

fn write_row<'a>(
    out: &mut impl Write,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let line: Vec<_> = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| format!("{cell:<width$}", width = *width))
        .collect();
    writeln!(out, "{}", line.join(" | ").trim_end())
}

#[cfg(test)]
mod test {
    use catalog_core::{
        data::{RecordStore, UserId},
        FilterEvent,
    };

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            RecordStore::from_json(
                r#"[{"id": 1, "name": "Roma", "sex": "m"}, {"id": 2, "name": "Anna", "sex": "f"}]"#,
                r#"[{"id": 10, "title": "Drinks", "icon": "🍹", "ownerId": 1}]"#,
                r#"[{"id": 100, "name": "Cola", "categoryId": 10}, {"id": 101, "name": "Fanta", "categoryId": 99}]"#,
            )
            .unwrap(),
        )
    }

    fn render(catalog: &mut Catalog) -> String {
        let mut out = Vec::new();
        page(&mut out, catalog).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_joined_rows() {
        let text = render(&mut catalog());
        assert!(text.contains("Owners: [All]  Roma   Anna "));
        assert!(text.contains("Search:\n"));
        assert!(text.contains("100 | Cola    | 🍹 - Drinks | Roma (m)"));
        let fanta = text.lines().find(|line| line.starts_with("101")).unwrap();
        assert!(fanta.starts_with("101 | Fanta   |"));
        assert!(!fanta.contains("Drinks") && !fanta.contains("Roma"));
        assert!(!text.contains(NO_MATCHES));
    }

    #[test]
    fn marks_selected_owner_and_search() {
        let mut catalog = catalog();
        catalog.dispatch(FilterEvent::SelectOwner(UserId(2)));
        catalog.dispatch(FilterEvent::SetSearchText("co".into()));
        let text = render(&mut catalog);
        assert!(text.contains(" All   Roma  [Anna]"));
        assert!(text.contains(r#"Search: "co""#));
        assert!(text.contains(NO_MATCHES));
        assert!(!text.contains("Cola"));
    }
}
