//! Tabular projection of survivor records.

use crate::dto::SurvivorRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Name,
    Age,
    Gender,
    Id,
    Longitude,
    Latitude,
    Water,
    Food,
    Medication,
    Ammunition,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::Age,
        Column::Gender,
        Column::Id,
        Column::Longitude,
        Column::Latitude,
        Column::Water,
        Column::Food,
        Column::Medication,
        Column::Ammunition,
    ];

    /// Wire field backing this column.
    pub fn field(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Age => "age",
            Column::Gender => "gender",
            Column::Id => "id",
            Column::Longitude => "longitude",
            Column::Latitude => "latitude",
            Column::Water => "water",
            Column::Food => "food",
            Column::Medication => "medication",
            Column::Ammunition => "ammunition",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Age => "Age",
            Column::Gender => "Gender",
            Column::Id => "Id",
            Column::Longitude => "Longitude",
            Column::Latitude => "Latitude",
            Column::Water => "Water",
            Column::Food => "Food",
            Column::Medication => "Medication",
            Column::Ammunition => "Ammunition",
        }
    }

    pub fn cell(self, record: &SurvivorRecord) -> String {
        match self {
            Column::Name => record.name.clone(),
            Column::Age => format_number(record.age),
            Column::Gender => record.gender.clone(),
            Column::Id => record.id.clone(),
            Column::Longitude => format_number(record.longitude),
            Column::Latitude => format_number(record.latitude),
            Column::Water => format_number(record.water),
            Column::Food => format_number(record.food),
            Column::Medication => format_number(record.medication),
            Column::Ammunition => format_number(record.ammunition),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridRow {
    pub cells: Vec<String>,
}

/// One row per record, in the order received.
pub fn rows(records: &[SurvivorRecord]) -> Vec<GridRow> {
    records
        .iter()
        .map(|record| GridRow {
            cells: Column::ALL.iter().map(|c| c.cell(record)).collect(),
        })
        .collect()
}

/// Shortest decimal form: `30`, `0`, `12.5`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // folds -0 into 0
        return "0".into();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survivor(name: &str, id: &str) -> SurvivorRecord {
        SurvivorRecord {
            name: name.into(),
            id: id.into(),
            ..SurvivorRecord::default()
        }
    }

    #[test]
    fn columns_follow_the_wire_fields_in_order() {
        let fields: Vec<_> = Column::ALL.iter().map(|c| c.field()).collect();
        assert_eq!(
            fields,
            [
                "name", "age", "gender", "id", "longitude", "latitude", "water", "food",
                "medication", "ammunition"
            ]
        );
        for column in Column::ALL {
            let mut chars = column.field().chars();
            let first = chars.next().map(|c| c.to_ascii_uppercase());
            let expected: String = first.into_iter().chain(chars).collect();
            assert_eq!(column.header(), expected);
        }
    }

    #[test]
    fn one_row_per_record_in_input_order() {
        let records = vec![survivor("Zed", "3"), survivor("Amy", "1"), survivor("Kai", "2")];
        let grid = rows(&records);

        assert_eq!(grid.len(), 3);
        let names: Vec<_> = grid.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(names, ["Zed", "Amy", "Kai"]);
        assert!(grid.iter().all(|r| r.cells.len() == Column::ALL.len()));
    }

    #[test]
    fn empty_input_renders_no_rows() {
        assert!(rows(&[]).is_empty());
    }

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-33.92), "-33.92");
    }
}
