use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn from_is_dir(is_dir: bool) -> EntryKind {
        if is_dir {
            EntryKind::Folder
        } else {
            EntryKind::File
        }
    }
}

/// A direct child of the listed directory, by name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// Children of one directory, in enumeration order within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingResult {
    pub files: Vec<String>,
    pub folders: Vec<String>,
}

impl ListingResult {
    pub fn push(&mut self, entry: Entry) {
        match entry.kind {
            EntryKind::File => self.files.push(entry.name),
            EntryKind::Folder => self.folders.push(entry.name),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }
}

impl FromIterator<Entry> for ListingResult {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut result = ListingResult::default();
        for entry in iter {
            result.push(entry);
        }
        result
    }
}
