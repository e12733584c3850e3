use crate::extract::{DateOrder, TabularSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub(crate) const FIRST_OF_FEBRUARY_CSV: &str = "Date,Type,Value\n\
    01/02/2020,Imported,3\n\
    01/02/2020,Local Linked,5\n";

pub(crate) const IMPORTED_CASES_CSV: &str = "Date,Type,Value\n\
    01/02/2020,Imported,3\n\
    01/02/2020,Local Linked,5\n\
    02/02/2020,Imported,1\n\
    02/02/2020,Local Linked,2\n";

pub(crate) const CASES_BY_TYPE_CSV: &str = "Date,Type,Value\n\
    01/02/2020,Imported,3\n\
    01/02/2020,Local Linked,5\n\
    02/02/2020,Imported,1\n\
    02/02/2020,Local Unlinked,2\n\
    03/02/2020,Local Linked,6\n\
    03/02/2020,Imported,4\n";

pub(crate) const SITUATION_REPORT_CSV: &str = "last_update,confirmed,recovered,deaths\n\
    2020-04-08 12:00:00,1623,406,6\n\
    2020-04-09 12:00:00,1910,460,6\n\
    2020-04-10 12:00:00,2108,492,7\n";

pub(crate) fn write_csv(temp_dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write CSV fixture");
    path
}

pub(crate) fn load_source(temp_dir: &TempDir, content: &str, date_order: DateOrder) -> TabularSource {
    let path = write_csv(temp_dir, "cases.csv", content);
    TabularSource::load(&path, "Date", date_order).expect("Failed to load CSV fixture")
}
