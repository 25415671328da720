//! The filter engine.
//!
//! Applies the three dashboard filters in a fixed order: date window,
//! involved-party OR, severity membership.

use accident_map_analytics_models::FilterCriteria;
use accident_map_dataset::{Record, RecordCollection};

/// Produces the filtered view of the collection for the given criteria.
///
/// Steps, in order:
/// 1. the inclusive date window January 1 of the start year through
///    December 31 of the end year,
/// 2. records where at least one named involved-party flag is true (an
///    empty party selection matches nothing),
/// 3. records whose severity is in the selected set (an empty selection,
///    or a record with no normalized severity, matches nothing).
///
/// A reversed year range yields an empty view. The collection is never
/// modified; the view borrows from it and is discarded after rendering.
#[must_use]
pub fn filter<'a>(collection: &'a RecordCollection, criteria: &FilterCriteria) -> Vec<&'a Record> {
    let Some((start, end)) = criteria.years.date_window() else {
        return Vec::new();
    };

    let view: Vec<&Record> = collection
        .records()
        .iter()
        .filter(|record| record.date >= start && record.date <= end)
        .filter(|record| record.involves_any(&criteria.parties))
        .filter(|record| {
            record
                .severity
                .is_some_and(|severity| criteria.severities.contains(&severity))
        })
        .collect();

    log::debug!(
        "Filter {:?} matched {} of {} records",
        criteria.years,
        view.len(),
        collection.len()
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use accident_map_accident_models::{AccidentType, Severity, Weekday};
    use accident_map_analytics_models::YearRange;
    use accident_map_dataset::RecordCollection;
    use chrono::NaiveDate;

    fn fixture_row(
        date: &str,
        severity: &str,
        weekday: &str,
        hour: u8,
        pedestrian: bool,
        bicycle: bool,
    ) -> String {
        let year = &date[..4];
        format!(
            "{date},47.42,9.37,Andere,{severity},{year},Jan,{weekday},{hour},{pedestrian},{bicycle}\n"
        )
    }

    /// Five known records: three pedestrian-involved in 2015, two not.
    fn five_record_fixture() -> RecordCollection {
        let mut csv = String::from(
            "Datum,Breitengrad,Längengrad,Unfalltyp,Unfallschwere,Jahr,Monat,Wochentag,Stunde,Fussgänger,Fahrrad\n",
        );
        csv.push_str(&fixture_row("2015-02-03", "Leicht", "Dienstag", 8, true, false));
        csv.push_str(&fixture_row("2015-06-15", "Schwer", "Montag", 17, true, false));
        csv.push_str(&fixture_row("2015-11-29", "Tod", "Sonntag", 2, true, true));
        csv.push_str(&fixture_row("2015-04-01", "Leicht", "Mittwoch", 12, false, true));
        csv.push_str(&fixture_row("2014-08-20", "Leicht", "Mittwoch", 9, true, false));
        RecordCollection::from_reader(csv.as_bytes()).unwrap()
    }

    fn pedestrian_criteria(years: YearRange) -> FilterCriteria {
        FilterCriteria {
            years,
            severities: Severity::all().to_vec(),
            parties: vec!["Fussgänger".to_owned()],
        }
    }

    #[test]
    fn pedestrian_2015_scenario_matches_three_records() {
        let collection = five_record_fixture();
        let view = filter(&collection, &pedestrian_criteria(YearRange::new(2015, 2015)));
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.year == 2015));
        assert!(view.iter().all(|r| r.parties["Fussgänger"]));
    }

    #[test]
    fn empty_severity_set_selects_nothing() {
        let collection = five_record_fixture();
        let criteria = FilterCriteria {
            years: YearRange::new(2011, 2022),
            severities: Vec::new(),
            parties: vec!["Fussgänger".to_owned(), "Fahrrad".to_owned()],
        };
        assert!(filter(&collection, &criteria).is_empty());
    }

    #[test]
    fn empty_party_set_selects_nothing() {
        let collection = five_record_fixture();
        let criteria = FilterCriteria {
            years: YearRange::new(2011, 2022),
            severities: Severity::all().to_vec(),
            parties: Vec::new(),
        };
        assert!(filter(&collection, &criteria).is_empty());
    }

    #[test]
    fn reversed_year_range_yields_empty_view() {
        let collection = five_record_fixture();
        let view = filter(&collection, &pedestrian_criteria(YearRange::new(2020, 2019)));
        assert!(view.is_empty());
    }

    #[test]
    fn date_window_is_inclusive_at_both_ends() {
        let mut csv = String::from(
            "Datum,Breitengrad,Längengrad,Unfalltyp,Unfallschwere,Jahr,Monat,Wochentag,Stunde,Fussgänger,Fahrrad\n",
        );
        csv.push_str(&fixture_row("2015-01-01", "Leicht", "Donnerstag", 0, true, false));
        csv.push_str(&fixture_row("2015-12-31", "Leicht", "Donnerstag", 23, true, false));
        let collection = RecordCollection::from_reader(csv.as_bytes()).unwrap();

        let view = filter(&collection, &pedestrian_criteria(YearRange::new(2015, 2015)));
        assert_eq!(view.len(), 2);
        assert_eq!(
            view[0].date,
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
        );
    }

    #[test]
    fn severity_subset_narrows_the_view() {
        let collection = five_record_fixture();
        let criteria = FilterCriteria {
            years: YearRange::new(2015, 2015),
            severities: vec![Severity::Tod],
            parties: vec!["Fussgänger".to_owned()],
        };
        let view = filter(&collection, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].severity, Some(Severity::Tod));
        assert_eq!(view[0].weekday, Weekday::Sonntag);
    }

    #[test]
    fn unknown_severity_never_matches() {
        let csv = "\
Datum,Breitengrad,Längengrad,Unfalltyp,Unfallschwere,Jahr,Monat,Wochentag,Stunde,Fussgänger
2015-03-02,47.42,9.37,Andere,Sachschaden,2015,Mar,Montag,8,True
";
        let collection = RecordCollection::from_reader(csv.as_bytes()).unwrap();
        let view = filter(&collection, &pedestrian_criteria(YearRange::new(2015, 2015)));
        assert!(view.is_empty());
    }

    #[test]
    fn view_keeps_normalized_metadata() {
        let collection = five_record_fixture();
        let view = filter(&collection, &pedestrian_criteria(YearRange::new(2015, 2015)));
        assert!(view.iter().all(|r| r.accident_type == Some(AccidentType::Andere)));
    }
}
