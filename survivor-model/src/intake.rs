//! Draft state for the survivor intake form.
//!
//! Submission is deliberately inert: the draft is never validated or sent.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeField {
    Name,
    Age,
    Gender,
    IdNumber,
}

impl IntakeField {
    pub const ALL: [IntakeField; 4] = [
        IntakeField::Name,
        IntakeField::Age,
        IntakeField::Gender,
        IntakeField::IdNumber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IntakeField::Name => "Name",
            IntakeField::Age => "Age",
            IntakeField::Gender => "Gender",
            IntakeField::IdNumber => "Id Number",
        }
    }

    /// DOM id of the input; the label's `for` points here.
    pub fn input_id(self) -> &'static str {
        match self {
            IntakeField::Name => "name",
            IntakeField::Age => "age",
            IntakeField::Gender => "gender",
            IntakeField::IdNumber => "idnumber",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub id_number: String,
}

impl IntakeDraft {
    pub fn get(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Name => &self.name,
            IntakeField::Age => &self.age,
            IntakeField::Gender => &self.gender,
            IntakeField::IdNumber => &self.id_number,
        }
    }

    pub fn set(&mut self, field: IntakeField, value: String) {
        match field {
            IntakeField::Name => self.name = value,
            IntakeField::Age => self.age = value,
            IntakeField::Gender => self.gender = value,
            IntakeField::IdNumber => self.id_number = value,
        }
    }

    /// Number of inputs holding something other than whitespace.
    pub fn filled(&self) -> usize {
        IntakeField::ALL
            .iter()
            .filter(|f| !self.get(**f).trim().is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_targets_its_own_input() {
        let ids: Vec<_> = IntakeField::ALL.iter().map(|f| f.input_id()).collect();
        assert_eq!(ids, ["name", "age", "gender", "idnumber"]);
        let labels: Vec<_> = IntakeField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Name", "Age", "Gender", "Id Number"]);
    }

    #[test]
    fn draft_tracks_each_field_independently() {
        let mut draft = IntakeDraft::default();
        assert_eq!(draft.filled(), 0);

        draft.set(IntakeField::Name, "Alice".into());
        draft.set(IntakeField::IdNumber, "  ".into());
        assert_eq!(draft.get(IntakeField::Name), "Alice");
        assert_eq!(draft.get(IntakeField::Age), "");
        assert_eq!(draft.filled(), 1);
    }
}
