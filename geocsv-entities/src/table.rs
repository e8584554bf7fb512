/// A single row of a table.
///
/// Cells are kept as plain text; an empty string is a missing value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record(Vec<String>);

impl Record {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Like [`Record::get`] but empty cells are reported as `None`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.get(index).filter(|v| !v.is_empty())
    }

    pub fn set<S: Into<String>>(&mut self, index: usize, value: S) {
        if index >= self.0.len() {
            self.0.resize(index + 1, String::new());
        }
        self.0[index] = value.into();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    fn pad_to(&mut self, len: usize) {
        if self.0.len() < len {
            self.0.resize(len, String::new());
        }
    }
}

impl From<Vec<String>> for Record {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Named columns and their rows, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            records: vec![],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut Record> {
        self.records.iter_mut()
    }

    pub fn push(&mut self, mut record: Record) {
        record.pad_to(self.columns.len());
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the index of the column `name`,
    /// appending an empty column if it does not exist yet.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_owned());
        let len = self.columns.len();
        for r in &mut self.records {
            r.pad_to(len);
        }
        len - 1
    }
}
