pub(crate) const YAML_DATA: &[u8] = br#"
sources:
  - name: "jhu"
    path: "data/apr-10-data.csv"
    date_column: "last_update"
  - name: "cases_by_type"
    path: "data/cases-by-type.csv"
    date_column: "Date"
    date_order: "month_first"
    separator: ";"
series:
  - name: "Confirmed"
    source: "jhu"
    y_column: "confirmed"
  - name: "Imported"
    source: "cases_by_type"
    x_column: "Date"
    y_column: "Value"
    filter:
      column: "Type"
      label: "Imported"
    missing_values: "exclude"
scalars:
  - name: "Active"
    combine: "difference"
    components:
      - label: "total"
        value:
          kind: "fixed"
          current: 2108
          reference: 1910
      - label: "recovered"
        value:
          kind: "series_latest"
          series: "Confirmed"
          reference_offset: 1
panels:
  - id: "confirmed-vs-imported"
    title: "Confirmed vs Imported"
    series: ["Confirmed", "Imported"]
"#;

pub(crate) const TOML_DATA: &[u8] = br#"
[[sources]]
name = "jhu"
path = "data/apr-10-data.csv"
date_column = "last_update"

[[sources]]
name = "cases_by_type"
path = "data/cases-by-type.csv"
date_column = "Date"
date_order = "month_first"
separator = ";"

[[series]]
name = "Confirmed"
source = "jhu"
y_column = "confirmed"

[[series]]
name = "Imported"
source = "cases_by_type"
x_column = "Date"
y_column = "Value"
missing_values = "exclude"

[series.filter]
column = "Type"
label = "Imported"

[[scalars]]
name = "Active"
combine = "difference"

[[scalars.components]]
label = "total"
value = { kind = "fixed", current = 2108.0, reference = 1910.0 }

[[scalars.components]]
label = "recovered"
value = { kind = "series_latest", series = "Confirmed", reference_offset = 1 }

[[panels]]
id = "confirmed-vs-imported"
title = "Confirmed vs Imported"
series = ["Confirmed", "Imported"]
"#;

pub(crate) const JSON_DATA: &[u8] = br#"
{
  "sources": [
    {
      "name": "jhu",
      "path": "data/apr-10-data.csv",
      "date_column": "last_update"
    },
    {
      "name": "cases_by_type",
      "path": "data/cases-by-type.csv",
      "date_column": "Date",
      "date_order": "month_first",
      "separator": ";"
    }
  ],
  "series": [
    {
      "name": "Confirmed",
      "source": "jhu",
      "y_column": "confirmed"
    },
    {
      "name": "Imported",
      "source": "cases_by_type",
      "x_column": "Date",
      "y_column": "Value",
      "filter": {
        "column": "Type",
        "label": "Imported"
      },
      "missing_values": "exclude"
    }
  ],
  "scalars": [
    {
      "name": "Active",
      "combine": "difference",
      "components": [
        {
          "label": "total",
          "value": { "kind": "fixed", "current": 2108, "reference": 1910 }
        },
        {
          "label": "recovered",
          "value": { "kind": "series_latest", "series": "Confirmed", "reference_offset": 1 }
        }
      ]
    }
  ],
  "panels": [
    {
      "id": "confirmed-vs-imported",
      "title": "Confirmed vs Imported",
      "series": ["Confirmed", "Imported"]
    }
  ]
}
"#;

pub(crate) const RON_DATA: &[u8] = br#"
(
  sources: [
    (
      name: "jhu",
      path: "data/apr-10-data.csv",
      date_column: "last_update",
    ),
    (
      name: "cases_by_type",
      path: "data/cases-by-type.csv",
      date_column: "Date",
      date_order: "month_first",
      separator: ";",
    ),
  ],
  series: [
    (
      name: "Confirmed",
      source: "jhu",
      y_column: "confirmed",
    ),
    (
      name: "Imported",
      source: "cases_by_type",
      x_column: "Date",
      y_column: "Value",
      filter: (
        column: "Type",
        label: "Imported",
      ),
      missing_values: "exclude",
    ),
  ],
  scalars: [
    (
      name: "Active",
      combine: "difference",
      components: [
        (
          label: "total",
          value: (kind: "fixed", current: 2108.0, reference: 1910.0),
        ),
        (
          label: "recovered",
          value: (kind: "series_latest", series: "Confirmed", reference_offset: 1),
        ),
      ],
    ),
  ],
  panels: [
    (
      id: "confirmed-vs-imported",
      title: "Confirmed vs Imported",
      series: ["Confirmed", "Imported"],
    ),
  ],
)
"#;

/// A complete dashboard config pointing at the CSV files `write_csv` places in `data_dir`.
pub(crate) fn dashboard_yaml(data_dir: &std::path::Path) -> String {
    format!(
        r#"
sources:
  - name: "jhu"
    path: "{jhu}"
    date_column: "last_update"
    date_order: "month_first"
  - name: "cases_by_type"
    path: "{cases}"
    date_column: "Date"
series:
  - name: "Confirmed"
    source: "jhu"
    y_column: "confirmed"
  - name: "Recovered"
    source: "jhu"
    y_column: "recovered"
  - name: "Imported"
    source: "cases_by_type"
    y_column: "Value"
    filter:
      column: "Type"
      label: "Imported"
scalars:
  - name: "Active"
    combine: "difference"
    components:
      - label: "total"
        value:
          kind: "series_latest"
          series: "Confirmed"
          reference_offset: 1
      - label: "recovered"
        value:
          kind: "series_latest"
          series: "Recovered"
          reference_offset: 1
  - name: "Deaths"
    combine: "identity"
    components:
      - label: "deaths"
        value:
          kind: "fixed"
          current: 7
panels:
  - id: "confirmed-vs-recovered"
    title: "Confirmed vs Recovered"
    series: ["Confirmed", "Recovered"]
"#,
        jhu = data_dir.join("jhu.csv").display(),
        cases = data_dir.join("cases.csv").display(),
    )
}
