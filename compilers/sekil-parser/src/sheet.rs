use sekil_protocol::{
    BatchReport, Category, ALL_FORMS_HEADER, ALL_FORMS_SHEET, CASE_HEADERS, PLURAL_HEADERS,
    POSSESSIVE_HEADERS, PREDICATIVE_HEADERS,
};

/// One exported table: a sheet name and its tab-separated body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: &'static str,
    pub body: String,
}

/// Renders a report as the five result sheets, flattened forms first.
pub fn render_report(report: &BatchReport) -> Vec<Sheet> {
    vec![
        Sheet {
            name: ALL_FORMS_SHEET,
            body: render(&[ALL_FORMS_HEADER], report.all_forms.iter().map(|f| vec![f.to_string()])),
        },
        Sheet {
            name: Category::Plural.sheet_name(),
            body: render(&PLURAL_HEADERS, report.plural.iter().map(|r| r.cells())),
        },
        Sheet {
            name: Category::Case.sheet_name(),
            body: render(&CASE_HEADERS, report.case.iter().map(|r| r.cells())),
        },
        Sheet {
            name: Category::Possessive.sheet_name(),
            body: render(&POSSESSIVE_HEADERS, report.possessive.iter().map(|r| r.cells())),
        },
        Sheet {
            name: Category::Predicative.sheet_name(),
            body: render(&PREDICATIVE_HEADERS, report.predicative.iter().map(|r| r.cells())),
        },
    ]
}

fn render(headers: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut out = headers.join("\t");
    out.push('\n');
    for row in rows {
        // Tabs inside a cell would shift every later column
        let cells: Vec<String> = row.iter().map(|c| c.replace('\t', " ")).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}
