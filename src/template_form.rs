//! Template Form State
//!
//! Ordered file-upload slots for the template marketplace forms. Slot ids
//! come from a local counter so keyed rendering stays stable across
//! add/remove for the whole form session; they are never persisted.
//!
//! Generic over the file handle (`web_sys::File` in the app) so the slot
//! bookkeeping and wire naming are testable off the browser.

use crate::models::TemplateFileRecord;

#[derive(Clone, Debug)]
pub struct FileSlot<F> {
    pub id: usize,
    pub file: Option<F>,
    /// Opaque server record for a file already uploaded (edit mode)
    pub existing: Option<TemplateFileRecord>,
}

#[derive(Clone, Debug)]
pub struct FileSlots<F> {
    slots: Vec<FileSlot<F>>,
    next_id: usize,
}

impl<F: Clone> Default for FileSlots<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> FileSlots<F> {
    /// A fresh form starts with one empty slot
    pub fn new() -> Self {
        Self {
            slots: vec![FileSlot {
                id: 0,
                file: None,
                existing: None,
            }],
            next_id: 1,
        }
    }

    /// Seed slots from the server's stored file records (edit mode).
    /// An empty record list still yields the single blank slot.
    pub fn from_existing(records: Vec<TemplateFileRecord>) -> Self {
        if records.is_empty() {
            return Self::new();
        }
        let slots: Vec<FileSlot<F>> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| FileSlot {
                id: index,
                file: None,
                existing: Some(record),
            })
            .collect();
        let next_id = slots.len();
        Self { slots, next_id }
    }

    pub fn slots(&self) -> &[FileSlot<F>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the remove buttons should be enabled at all
    pub fn can_remove(&self) -> bool {
        self.slots.len() > 1
    }

    pub fn add(&mut self) {
        self.slots.push(FileSlot {
            id: self.next_id,
            file: None,
            existing: None,
        });
        self.next_id += 1;
    }

    /// Remove the slot with the given id. The last remaining slot is
    /// kept (the UI disables the control in that state too).
    pub fn remove(&mut self, id: usize) {
        if self.slots.len() > 1 {
            self.slots.retain(|slot| slot.id != id);
        }
    }

    pub fn set_file(&mut self, id: usize, file: Option<F>) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == id) {
            slot.file = file;
        }
    }

    pub fn has_any_file(&self) -> bool {
        self.slots.iter().any(|slot| slot.file.is_some())
    }

    /// New files paired with their multipart part names: `file1..fileN`
    /// compacted in slot order (`file0` is reserved for the cover image)
    pub fn file_parts(&self) -> Vec<(String, F)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.file.clone())
            .enumerate()
            .map(|(index, file)| (format!("file{}", index + 1), file))
            .collect()
    }

    /// Retained server files paired with their `existingFile{n}` part
    /// names, numbered by slot position as the backend expects
    pub fn existing_parts(&self) -> Vec<(String, TemplateFileRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.existing
                    .as_ref()
                    .map(|record| (format!("existingFile{}", index + 1), record.clone()))
            })
            .collect()
    }
}

/// Shared pre-submit checks for the add/edit template forms.
/// `require_cover`/`require_files` differ between the two: a new template
/// must carry a cover and at least one file, an edit may keep what the
/// server already has.
pub fn validate_template(
    name: &str,
    description: &str,
    price: &str,
    has_cover: bool,
    require_cover: bool,
    has_files: bool,
    require_files: bool,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter a template name!".to_string());
    }
    if description.trim().is_empty() {
        return Err("Please enter a template description!".to_string());
    }
    if require_cover && !has_cover {
        return Err("Please select a cover image!".to_string());
    }
    if !price.trim().is_empty() && price.trim().parse::<f64>().is_err() {
        return Err("Please enter a valid price!".to_string());
    }
    if require_files && !has_files {
        return Err("Please select at least one template file!".to_string());
    }
    Ok(())
}

/// Price field as sent on the wire: blank means free
pub fn price_or_zero(price: &str) -> String {
    let trimmed = price.trim();
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str) -> TemplateFileRecord {
        TemplateFileRecord {
            filename: Some(name.to_string()),
            path: Some(format!("uploads/{name}")),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_new_form_has_one_blank_slot() {
        let slots: FileSlots<&str> = FileSlots::new();
        assert_eq!(slots.len(), 1);
        assert!(!slots.can_remove());
        assert!(!slots.has_any_file());
    }

    #[test]
    fn test_slot_ids_stay_unique_across_add_and_remove() {
        let mut slots: FileSlots<&str> = FileSlots::new();
        slots.add();
        slots.add(); // ids 0, 1, 2
        slots.remove(1); // ids 0, 2
        slots.add(); // must NOT reuse id 2

        let ids: Vec<usize> = slots.slots().iter().map(|slot| slot.id).collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn test_remove_last_slot_is_refused() {
        let mut slots: FileSlots<&str> = FileSlots::new();
        slots.remove(0);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_set_file_targets_one_slot() {
        let mut slots: FileSlots<&str> = FileSlots::new();
        slots.add();
        slots.set_file(1, Some("b.pdf"));

        assert!(slots.slots()[0].file.is_none());
        assert_eq!(slots.slots()[1].file, Some("b.pdf"));
        assert!(slots.has_any_file());
    }

    #[test]
    fn test_file_parts_are_compacted_from_file1() {
        let mut slots: FileSlots<&str> = FileSlots::new();
        slots.add();
        slots.add();
        // only the first and third slots carry files
        slots.set_file(0, Some("a.pdf"));
        slots.set_file(2, Some("c.pdf"));

        let parts = slots.file_parts();
        assert_eq!(
            parts,
            vec![
                ("file1".to_string(), "a.pdf"),
                ("file2".to_string(), "c.pdf"),
            ]
        );
    }

    #[test]
    fn test_from_existing_seeds_slots_and_keeps_counting() {
        let mut slots: FileSlots<&str> =
            FileSlots::from_existing(vec![make_record("a.pdf"), make_record("b.pdf")]);
        assert_eq!(slots.len(), 2);
        assert!(slots.slots().iter().all(|slot| slot.existing.is_some()));

        slots.add();
        assert_eq!(slots.slots()[2].id, 2);

        let existing = slots.existing_parts();
        assert_eq!(existing.len(), 2);
        assert_eq!(existing[0].0, "existingFile1");
        assert_eq!(existing[1].0, "existingFile2");
    }

    #[test]
    fn test_from_existing_empty_falls_back_to_blank_slot() {
        let slots: FileSlots<&str> = FileSlots::from_existing(Vec::new());
        assert_eq!(slots.len(), 1);
        assert!(slots.slots()[0].existing.is_none());
    }

    #[test]
    fn test_validate_template_checks() {
        assert!(validate_template("T", "d", "", true, true, true, true).is_ok());
        assert!(validate_template("", "d", "", true, true, true, true).is_err());
        assert!(validate_template("T", "", "", true, true, true, true).is_err());
        assert!(validate_template("T", "d", "", false, true, true, true).is_err());
        assert!(validate_template("T", "d", "", false, false, true, true).is_ok());
        assert!(validate_template("T", "d", "abc", true, true, true, true).is_err());
        assert!(validate_template("T", "d", "12.50", true, true, false, false).is_ok());
        assert!(validate_template("T", "d", "", true, true, false, true).is_err());
    }

    #[test]
    fn test_price_or_zero() {
        assert_eq!(price_or_zero(""), "0");
        assert_eq!(price_or_zero("  "), "0");
        assert_eq!(price_or_zero("49.99"), "49.99");
    }
}
