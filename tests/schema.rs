// Mixed-layout files: fixed-width header rows and quoted detail rows

use textcolumns::{Error, Layout, Schema, SchemaEntry, Signals};

fn invoice_schema() -> Schema {
    let mut schema = Schema::new();
    schema
        .add(SchemaEntry::new(
            "HDR",
            Layout::Fixed {
                widths: vec![3, 8, 6],
                fill: '.',
            },
            ["type", "customer", "date"],
        ))
        .unwrap();
    schema
        .add(SchemaEntry::new(
            "LN|",
            Layout::Quoted {
                signals: Signals::pipe_delimited(),
                force_quotes: false,
            },
            ["type", "sku", "description", "qty"],
        ))
        .unwrap();
    schema
}

#[test]
fn split_mixed_rows() {
    let schema = invoice_schema();
    let text = "HDRacme....261019\nLN|A1|\"bolt | nut\"|40\nLN|B2|washer|7";

    let rows: Vec<_> = text
        .split('\n')
        .map(|line| schema.split(line).unwrap())
        .collect();

    assert_eq!(rows[0].get_by_name("customer"), Some("acme"));
    assert_eq!(rows[0].get_by_name("date"), Some("261019"));
    assert_eq!(rows[1].get_by_name("description"), Some("bolt | nut"));
    assert_eq!(rows[2].get_by_name("qty"), Some("7"));
    assert_eq!(rows[2].names()[1], "sku");
}

#[test]
fn join_then_split_through_schema() {
    let schema = invoice_schema();

    let header = schema.join("HDR", ["HDR", "acme", "261019"]).unwrap();
    assert_eq!(header, "HDRacme....261019");
    assert_eq!(
        schema.split(&header).unwrap().into_fields(),
        vec!["HDR", "acme", "261019"]
    );

    let line = schema.join("LN|", ["LN", "C3", "say \"hi\"", "1"]).unwrap();
    assert_eq!(line, "LN|C3|\"say \"\"hi\"\"\"|1");
    assert_eq!(
        schema.split(&line).unwrap().iter().collect::<Vec<_>>(),
        vec!["LN", "C3", "say \"hi\"", "1"]
    );
}

#[test]
fn layout_errors_surface() {
    let schema = invoice_schema();
    assert_eq!(
        schema.split("HDRshort").map(|row| row.len()),
        Err(Error::FixedWidthMismatch {
            expected: 17,
            actual: 8
        })
    );
    assert_eq!(
        schema.join("HDR", ["HDR", "much-too-long", "261019"]),
        Err(Error::FieldTooWide {
            field: 1,
            width: 8,
            len: 13
        })
    );
    assert!(matches!(schema.split("TRL|1"), Err(Error::NoSchemaEntry)));
}
