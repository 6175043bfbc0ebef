//! Ограниченный список файлов изображений.

use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_MAX_IMAGES: usize = 9;

pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Ключ файла: имя, размер, время изменения.
/// Один и тот же файл сохраняет ключ между перерисовками.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileKey {
    pub name: String,
    pub size: u64,
    pub modified: i64,
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.size, self.modified)
    }
}

pub trait UploadFile: Clone {
    fn key(&self) -> FileKey;
    fn mime_type(&self) -> String;

    fn is_allowed_image(&self) -> bool {
        let mime = self.mime_type();
        ALLOWED_IMAGE_TYPES.contains(&mime.as_str())
    }
}

/// Что произошло с файлами одного `add`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOutcome {
    pub accepted: usize,
    pub rejected_type: usize,
    pub over_capacity: usize,
    /// Ключ уже есть в списке или раньше в той же пачке
    pub duplicate: usize,
}

#[derive(Debug, Clone)]
pub struct ImageList<F> {
    files: Vec<F>,
    max: usize,
}

impl<F: UploadFile> ImageList<F> {
    pub fn new(max: usize) -> Self {
        Self {
            files: Vec::new(),
            max,
        }
    }

    /// Список из внешнего источника без повторных ключей и не длиннее `max`;
    /// возвращает `true`, если список пришлось исправить
    pub fn from_external(files: Vec<F>, max: usize) -> (Self, bool) {
        let original_len = files.len();
        let mut seen = HashSet::new();
        let mut files: Vec<F> = files.into_iter().filter(|f| seen.insert(f.key())).collect();
        files.truncate(max);
        let corrected = files.len() != original_len;
        (Self { files, max }, corrected)
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn into_files(self) -> Vec<F> {
        self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.files.len() >= self.max
    }

    pub fn keys(&self) -> Vec<FileKey> {
        self.files.iter().map(UploadFile::key).collect()
    }

    /// Отбрасывает неподходящие типы и повторные ключи, дописывает в конец,
    /// обрезает до `max`. Один ключ = один файл = одно превью.
    pub fn add(&mut self, incoming: impl IntoIterator<Item = F>) -> AddOutcome {
        let mut outcome = AddOutcome::default();
        let mut keys: HashSet<FileKey> = self.files.iter().map(UploadFile::key).collect();
        for file in incoming {
            if !file.is_allowed_image() {
                outcome.rejected_type += 1;
            } else if keys.contains(&file.key()) {
                outcome.duplicate += 1;
            } else if self.files.len() >= self.max {
                outcome.over_capacity += 1;
            } else {
                keys.insert(file.key());
                self.files.push(file);
                outcome.accepted += 1;
            }
        }
        outcome
    }

    pub fn remove_at(&mut self, index: usize) -> Option<F> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn remove_all(&mut self) {
        self.files.clear();
    }

    pub fn find(&self, key: &FileKey) -> Option<&F> {
        self.files.iter().find(|f| &f.key() == key)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct TestFile {
        pub name: String,
        pub mime: String,
    }

    impl TestFile {
        pub fn png(name: &str) -> Self {
            Self {
                name: name.to_string(),
                mime: "image/png".to_string(),
            }
        }

        pub fn pdf(name: &str) -> Self {
            Self {
                name: name.to_string(),
                mime: "application/pdf".to_string(),
            }
        }
    }

    impl UploadFile for TestFile {
        fn key(&self) -> FileKey {
            FileKey {
                name: self.name.clone(),
                size: self.name.len() as u64,
                modified: 1_700_000_000,
            }
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }
    }

    fn names(list: &ImageList<TestFile>) -> Vec<String> {
        list.files().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_add_over_capacity_keeps_head_in_order() {
        let max = DEFAULT_MAX_IMAGES;
        let mut list = ImageList::new(max);
        let incoming: Vec<TestFile> = (0..max + 4).map(|i| TestFile::png(&format!("f{i}.png"))).collect();

        let outcome = list.add(incoming);

        assert_eq!(list.len(), max);
        assert_eq!(outcome.accepted, max);
        assert_eq!(outcome.over_capacity, 4);
        let expected: Vec<String> = (0..max).map(|i| format!("f{i}.png")).collect();
        assert_eq!(names(&list), expected);
    }

    #[test]
    fn test_add_filters_disallowed_types() {
        let mut list = ImageList::new(3);
        let outcome = list.add(vec![TestFile::pdf("brochure.pdf"), TestFile::png("a.png")]);
        assert_eq!(outcome.rejected_type, 1);
        assert_eq!(names(&list), vec!["a.png"]);
    }

    #[test]
    fn test_consecutive_adds_append() {
        let mut list = ImageList::new(3);
        list.add(vec![TestFile::png("a.png"), TestFile::png("b.png")]);
        let outcome = list.add(vec![TestFile::png("c.png"), TestFile::png("d.png")]);
        assert_eq!(names(&list), vec!["a.png", "b.png", "c.png"]);
        assert_eq!(outcome.over_capacity, 1);
        assert!(list.is_full());
    }

    #[test]
    fn test_remove_at_and_all() {
        let mut list = ImageList::new(5);
        list.add(vec![TestFile::png("a.png"), TestFile::png("b.png"), TestFile::png("c.png")]);
        assert_eq!(list.remove_at(1).map(|f| f.name), Some("b.png".to_string()));
        assert!(list.remove_at(7).is_none());
        assert_eq!(names(&list), vec!["a.png", "c.png"]);
        list.remove_all();
        assert!(list.is_empty());
    }

    #[test]
    fn test_from_external_truncates_once() {
        let files: Vec<TestFile> = (0..5).map(|i| TestFile::png(&format!("x{i}.png"))).collect();
        let (list, truncated) = ImageList::from_external(files, 3);
        assert!(truncated);
        assert_eq!(list.len(), 3);

        let (again, truncated_again) = ImageList::from_external(list.into_files(), 3);
        assert!(!truncated_again);
        assert_eq!(again.len(), 3);
    }

    #[test]
    fn test_add_skips_repeated_keys() {
        let mut list = ImageList::new(5);
        list.add(vec![TestFile::png("a.png")]);
        let outcome = list.add(vec![
            TestFile::png("a.png"),
            TestFile::png("b.png"),
            TestFile::png("b.png"),
        ]);
        assert_eq!(outcome.duplicate, 2);
        assert_eq!(outcome.accepted, 1);
        assert_eq!(names(&list), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_from_external_drops_repeated_keys() {
        let files = vec![TestFile::png("a.png"), TestFile::png("a.png"), TestFile::png("b.png")];
        let (list, corrected) = ImageList::from_external(files, 5);
        assert!(corrected);
        assert_eq!(names(&list), vec!["a.png", "b.png"]);

        let (_, corrected_again) = ImageList::from_external(list.into_files(), 5);
        assert!(!corrected_again);
    }

    #[test]
    fn test_file_key_display() {
        let key = TestFile::png("ring.png").key();
        assert_eq!(key.to_string(), "ring.png:8:1700000000");
    }
}
