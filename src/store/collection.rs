use crate::model::Record;

/// An insertion-ordered list of records with its own id counter.
///
/// Ids are minted from `next_id`, which only ever moves forward. Removing a
/// record never makes its id available again.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    next_id: i32,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<T>) -> Self {
        let mut collection = Self::new();
        for record in records {
            collection.append(record);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// The id the next created record will get.
    pub fn next_id(&self) -> i32 {
        self.next_id
    }

    /// Reserve an id for a record about to be appended.
    pub fn mint_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.iter().find(|r| predicate(r))
    }

    pub fn find_by_id(&self, id: i32) -> Option<&T> {
        self.find(|r| r.id() == id)
    }

    pub fn filter<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.iter().position(|r| predicate(r))
    }

    pub fn position_of(&self, id: i32) -> Option<usize> {
        self.position(|r| r.id() == id)
    }

    /// Append a record, moving the id counter past its id if needed.
    pub fn append(&mut self, record: T) {
        if record.id() >= self.next_id {
            self.next_id = record.id() + 1;
        }
        self.records.push(record);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Replace the record at `index`, returning the one it displaced.
    pub fn replace_at(&mut self, index: usize, record: T) -> Option<T> {
        let slot = self.records.get_mut(index)?;
        Some(std::mem::replace(slot, record))
    }

    /// Remove every record matching `predicate`, keeping the order of the rest.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            if predicate(&record) {
                removed.push(record);
            } else {
                kept.push(record);
            }
        }
        self.records = kept;
        removed
    }
}

#[cfg(test)]
impl<T> Collection<T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;

    fn sample() -> Collection<Country> {
        Collection::from_records(vec![
            Country::new(1, "United States"),
            Country::new(2, "France"),
            Country::new(3, "Japan"),
        ])
    }

    #[test]
    fn test_from_records_sets_counter_past_max_id() {
        let collection = sample();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.next_id(), 4);
    }

    #[test]
    fn test_find_and_filter() {
        let collection = sample();
        assert_eq!(collection.find_by_id(2).unwrap().name, "France");
        assert!(collection.find_by_id(9).is_none());

        let matched = collection.filter(|c| c.id >= 2);
        let names: Vec<_> = matched.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["France", "Japan"]);
    }

    #[test]
    fn test_remove_at_keeps_order() {
        let mut collection = sample();
        let removed = collection.remove_at(1).unwrap();
        assert_eq!(removed.name, "France");
        let ids: Vec<_> = collection.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(collection.remove_at(5).is_none());
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut collection = sample();
        collection.remove_at(0);
        let id = collection.mint_id();
        assert_eq!(id, 4);
        assert!(collection.find_by_id(id).is_none());
        collection.append(Country::new(id, "Italy"));
        assert_eq!(collection.next_id(), 5);
    }

    #[test]
    fn test_replace_at() {
        let mut collection = sample();
        let old = collection
            .replace_at(2, Country::new(3, "Nippon"))
            .unwrap();
        assert_eq!(old.name, "Japan");
        assert_eq!(collection.get(2).unwrap().name, "Nippon");
        assert!(collection.replace_at(7, Country::new(8, "Nowhere")).is_none());
    }

    #[test]
    fn test_remove_where() {
        let mut collection = sample();
        let removed = collection.remove_where(|c| c.id != 2);
        assert_eq!(removed.len(), 2);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).unwrap().name, "France");
    }
}
