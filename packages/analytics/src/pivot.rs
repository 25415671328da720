//! The aggregation engine.
//!
//! Builds the weekday-by-hour frequency pivot from a filtered view.

use std::collections::{BTreeMap, BTreeSet};

use accident_map_accident_models::Weekday;
use accident_map_analytics_models::{PivotRow, PivotTable};
use accident_map_dataset::Record;

/// Width of the rendered table including the weekday column. Hours range
/// 0-23, so the cap can never actually truncate, but it is kept to match
/// the fixed-width slice of the rendered table exactly.
const MAX_TABLE_COLUMNS: usize = 25;

/// Builds the weekday-by-hour pivot for a filtered view.
///
/// Groups the view by (weekday, hour) and counts records per group. Rows
/// are emitted in fixed Montag-to-Sonntag order, never alphabetical; a
/// weekday with no records in the view is omitted. Columns are the hour
/// values present in the view, ascending, and every rendered (weekday,
/// hour) cell is dense and zero-filled. The sum of all cells equals the
/// size of the view.
#[must_use]
pub fn aggregate(view: &[&Record]) -> PivotTable {
    let mut counts: BTreeMap<(Weekday, u8), u64> = BTreeMap::new();
    for record in view {
        *counts.entry((record.weekday, record.hour)).or_insert(0) += 1;
    }

    let mut hours: Vec<u8> = view
        .iter()
        .map(|record| record.hour)
        .collect::<BTreeSet<u8>>()
        .into_iter()
        .collect();
    hours.truncate(MAX_TABLE_COLUMNS - 1);

    // Weekday derives Ord in Montag..Sonntag order, so iterating all()
    // is the categorical sort of the source.
    let rows: Vec<PivotRow> = Weekday::all()
        .iter()
        .filter(|weekday| counts.keys().any(|(day, _)| day == *weekday))
        .map(|weekday| PivotRow {
            weekday: *weekday,
            counts: hours
                .iter()
                .map(|hour| counts.get(&(*weekday, *hour)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    PivotTable { hours, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accident_map_dataset::RecordCollection;

    fn view_fixture(rows: &[(&str, &str, u8)]) -> RecordCollection {
        let mut csv = String::from(
            "Datum,Breitengrad,Längengrad,Unfalltyp,Unfallschwere,Jahr,Monat,Wochentag,Stunde,Fussgänger\n",
        );
        for (date, weekday, hour) in rows {
            let year = &date[..4];
            csv.push_str(&format!(
                "{date},47.42,9.37,Andere,Leicht,{year},Jan,{weekday},{hour},True\n"
            ));
        }
        RecordCollection::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn cell_sum_equals_view_size() {
        let collection = view_fixture(&[
            ("2015-01-05", "Montag", 8),
            ("2015-01-05", "Montag", 8),
            ("2015-01-06", "Dienstag", 17),
            ("2015-01-10", "Samstag", 2),
            ("2015-01-11", "Sonntag", 8),
        ]);
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);
        assert_eq!(table.total(), view.len() as u64);
    }

    #[test]
    fn rows_follow_weekday_order_not_alphabetical() {
        let collection = view_fixture(&[
            ("2015-01-11", "Sonntag", 9),
            ("2015-01-09", "Freitag", 9),
            ("2015-01-06", "Dienstag", 9),
            ("2015-01-08", "Donnerstag", 9),
        ]);
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);

        let order: Vec<Weekday> = table.rows.iter().map(|row| row.weekday).collect();
        // Alphabetical would put Dienstag before Donnerstag before Freitag
        // before Sonntag too, so include a day that breaks the tie.
        assert_eq!(
            order,
            [
                Weekday::Dienstag,
                Weekday::Donnerstag,
                Weekday::Freitag,
                Weekday::Sonntag
            ]
        );

        let collection = view_fixture(&[
            ("2015-01-10", "Samstag", 9),
            ("2015-01-07", "Mittwoch", 9),
            ("2015-01-05", "Montag", 9),
        ]);
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);
        let order: Vec<Weekday> = table.rows.iter().map(|row| row.weekday).collect();
        assert_eq!(order, [Weekday::Montag, Weekday::Mittwoch, Weekday::Samstag]);
    }

    #[test]
    fn absent_weekdays_are_omitted_entirely() {
        let collection = view_fixture(&[("2015-01-05", "Montag", 8)]);
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].weekday, Weekday::Montag);
    }

    #[test]
    fn cells_are_dense_and_zero_filled() {
        let collection = view_fixture(&[
            ("2015-01-05", "Montag", 8),
            ("2015-01-06", "Dienstag", 17),
        ]);
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);

        assert_eq!(table.hours, [8, 17]);
        for row in &table.rows {
            assert_eq!(row.counts.len(), table.hours.len());
        }
        // Montag has no 17:00 record; the cell exists and is zero.
        assert_eq!(table.rows[0].counts, [1, 0]);
        assert_eq!(table.rows[1].counts, [0, 1]);
    }

    #[test]
    fn hour_columns_are_ascending() {
        let collection = view_fixture(&[
            ("2015-01-05", "Montag", 23),
            ("2015-01-05", "Montag", 0),
            ("2015-01-05", "Montag", 12),
        ]);
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);
        assert_eq!(table.hours, [0, 12, 23]);
    }

    #[test]
    fn full_day_stays_within_the_column_cap() {
        let rows: Vec<(String, u8)> = (0u8..24).map(|h| ("Montag".to_owned(), h)).collect();
        let mut csv = String::from(
            "Datum,Breitengrad,Längengrad,Unfalltyp,Unfallschwere,Jahr,Monat,Wochentag,Stunde,Fussgänger\n",
        );
        for (weekday, hour) in &rows {
            csv.push_str(&format!(
                "2015-01-05,47.42,9.37,Andere,Leicht,2015,Jan,{weekday},{hour},True\n"
            ));
        }
        let collection = RecordCollection::from_reader(csv.as_bytes()).unwrap();
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);
        assert_eq!(table.hours.len(), 24);
        assert_eq!(table.total(), 24);
    }

    #[test]
    fn empty_view_produces_empty_table() {
        let table = aggregate(&[]);
        assert!(table.hours.is_empty());
        assert!(table.rows.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn counts_are_never_negative() {
        // u64 cells make this structural; assert the type's contract holds
        // through serialization anyway.
        let collection = view_fixture(&[("2015-01-05", "Montag", 8)]);
        let view: Vec<_> = collection.records().iter().collect();
        let table = aggregate(&view);
        assert!(table.rows.iter().flat_map(|r| &r.counts).all(|&c| c < u64::MAX));
    }
}
