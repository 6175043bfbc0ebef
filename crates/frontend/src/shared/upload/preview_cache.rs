//! Кэш превью: ключ файла → дескриптор (объектный URL в браузере).
//!
//! Каждый созданный дескриптор освобождается ровно один раз: при удалении
//! файла из списка, в `release_all` или при уничтожении кэша.

use super::image_list::{FileKey, UploadFile};
use std::collections::{BTreeMap, HashSet};

pub trait PreviewBackend {
    type File: UploadFile;
    type Handle: Clone;

    fn create(&mut self, file: &Self::File) -> Result<Self::Handle, String>;
    fn release(&mut self, handle: Self::Handle);
}

pub struct PreviewCache<B: PreviewBackend> {
    backend: B,
    handles: BTreeMap<FileKey, B::Handle>,
}

impl<B: PreviewBackend> PreviewCache<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handles: BTreeMap::new(),
        }
    }

    /// Приводит кэш к текущему списку файлов.
    ///
    /// Ключи, которых нет в списке, освобождаются; новые получают дескриптор;
    /// у оставшихся дескриптор не меняется.
    pub fn sync(&mut self, files: &[B::File]) {
        let live: HashSet<FileKey> = files.iter().map(UploadFile::key).collect();

        let stale: Vec<FileKey> = self
            .handles
            .keys()
            .filter(|key| !live.contains(*key))
            .cloned()
            .collect();
        for key in stale {
            if let Some(handle) = self.handles.remove(&key) {
                self.backend.release(handle);
            }
        }

        for file in files {
            let key = file.key();
            if self.handles.contains_key(&key) {
                continue;
            }
            match self.backend.create(file) {
                Ok(handle) => {
                    self.handles.insert(key, handle);
                }
                Err(e) => log::warn!("Preview for '{}' not created: {}", key.name, e),
            }
        }
    }

    pub fn handle(&self, key: &FileKey) -> Option<&B::Handle> {
        self.handles.get(key)
    }

    pub fn live_count(&self) -> usize {
        self.handles.len()
    }

    pub fn snapshot(&self) -> BTreeMap<FileKey, B::Handle> {
        self.handles.clone()
    }

    pub fn release_all(&mut self) {
        let handles = std::mem::take(&mut self.handles);
        for (_, handle) in handles {
            self.backend.release(handle);
        }
    }
}

impl<B: PreviewBackend> Drop for PreviewCache<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::upload::image_list::tests::TestFile;
    use crate::shared::upload::image_list::ImageList;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        created: usize,
        released: Vec<String>,
    }

    struct CountingBackend {
        ledger: Rc<RefCell<Ledger>>,
        fail_on: Option<String>,
    }

    impl PreviewBackend for CountingBackend {
        type File = TestFile;
        type Handle = String;

        fn create(&mut self, file: &TestFile) -> Result<String, String> {
            if self.fail_on.as_deref() == Some(file.name.as_str()) {
                return Err("blob unavailable".into());
            }
            let mut ledger = self.ledger.borrow_mut();
            ledger.created += 1;
            Ok(format!("blob:{}#{}", file.name, ledger.created))
        }

        fn release(&mut self, handle: String) {
            self.ledger.borrow_mut().released.push(handle);
        }
    }

    fn cache() -> (PreviewCache<CountingBackend>, Rc<RefCell<Ledger>>) {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        let backend = CountingBackend {
            ledger: ledger.clone(),
            fail_on: None,
        };
        (PreviewCache::new(backend), ledger)
    }

    fn live(ledger: &Rc<RefCell<Ledger>>) -> usize {
        let ledger = ledger.borrow();
        ledger.created - ledger.released.len()
    }

    #[test]
    fn test_remove_releases_exactly_one_handle() {
        let (mut cache, ledger) = cache();
        let mut list = ImageList::new(9);
        list.add(vec![TestFile::png("a.png"), TestFile::png("b.png"), TestFile::png("c.png")]);
        cache.sync(list.files());
        assert_eq!(cache.live_count(), 3);

        list.remove_at(1);
        cache.sync(list.files());

        let ledger_ref = ledger.borrow();
        assert_eq!(ledger_ref.released, vec!["blob:b.png#2".to_string()]);
        assert_eq!(cache.live_count(), 2);
    }

    #[test]
    fn test_unchanged_files_keep_their_handle() {
        let (mut cache, ledger) = cache();
        let mut list = ImageList::new(9);
        list.add(vec![TestFile::png("a.png")]);
        cache.sync(list.files());
        let first = cache.handle(&TestFile::png("a.png").key()).cloned();

        list.add(vec![TestFile::png("b.png")]);
        cache.sync(list.files());
        cache.sync(list.files());

        assert_eq!(cache.handle(&TestFile::png("a.png").key()).cloned(), first);
        assert_eq!(ledger.borrow().created, 2);
    }

    #[test]
    fn test_live_handles_track_file_count() {
        let (mut cache, ledger) = cache();
        let mut list = ImageList::new(4);
        let steps: Vec<Box<dyn Fn(&mut ImageList<TestFile>)>> = vec![
            Box::new(|l: &mut ImageList<TestFile>| {
                l.add(vec![TestFile::png("a.png"), TestFile::png("b.png")]);
            }),
            Box::new(|l: &mut ImageList<TestFile>| {
                l.add((0..5).map(|i| TestFile::png(&format!("n{i}.png"))));
            }),
            Box::new(|l: &mut ImageList<TestFile>| {
                l.remove_at(0);
            }),
            Box::new(|l: &mut ImageList<TestFile>| {
                l.add(vec![TestFile::pdf("x.pdf"), TestFile::png("z.png")]);
            }),
            Box::new(|l: &mut ImageList<TestFile>| l.remove_all()),
            Box::new(|l: &mut ImageList<TestFile>| {
                l.add(vec![TestFile::png("a.png")]);
            }),
        ];
        for step in steps {
            step(&mut list);
            cache.sync(list.files());
            assert_eq!(cache.live_count(), list.len());
            assert_eq!(live(&ledger), list.len());
        }
    }

    #[test]
    fn test_same_file_added_twice_keeps_one_handle_per_file() {
        let (mut cache, ledger) = cache();
        let mut list = ImageList::new(9);
        list.add(vec![TestFile::png("a.png")]);
        list.add(vec![TestFile::png("a.png")]);
        cache.sync(list.files());
        assert_eq!(list.len(), 1);
        assert_eq!(cache.live_count(), list.len());

        list.remove_at(0);
        cache.sync(list.files());
        assert_eq!(cache.live_count(), 0);
        assert_eq!(ledger.borrow().released.len(), 1);
        assert_eq!(live(&ledger), 0);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let (mut cache, ledger) = cache();
        let mut list = ImageList::new(9);
        list.add(vec![TestFile::png("a.png"), TestFile::png("b.png")]);
        cache.sync(list.files());

        cache.release_all();
        assert_eq!(live(&ledger), 0);

        cache.sync(list.files());
        drop(cache);
        assert_eq!(live(&ledger), 0);
        assert_eq!(ledger.borrow().released.len(), 4);
    }

    #[test]
    fn test_failed_create_is_skipped() {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        let mut cache = PreviewCache::new(CountingBackend {
            ledger: ledger.clone(),
            fail_on: Some("broken.png".into()),
        });
        cache.sync(&[TestFile::png("broken.png"), TestFile::png("ok.png")]);
        assert_eq!(cache.live_count(), 1);
        assert!(cache.handle(&TestFile::png("broken.png").key()).is_none());
    }
}
