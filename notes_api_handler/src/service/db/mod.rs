mod delete_note;
mod get_note;
mod list_notes;
mod put_note;
mod update_note;

use aws_sdk_dynamodb::{
    self as dynamodb,
    error::{ProvideErrorMetadata, SdkError},
};
use dynamodb_client::is_conditional_check_failed;
#[allow(unused_imports)]
use mockall::automock;
use thiserror::Error;

#[cfg(not(test))]
pub use NotesTableClient as NotesTable;

#[cfg(test)]
pub use MockNotesTableClient as NotesTable;

use crate::model::{Note, NoteUpdate};

/// The errors the routes branch on
#[derive(Debug, Error)]
pub enum NoteStoreError {
    /// no note exists under the requested key
    #[error("note not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Maps a write guarded by the existence condition. A failed condition means there
/// was no note to touch.
fn not_found_on_condition<E, R>(err: SdkError<E, R>, action: &'static str) -> NoteStoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if is_conditional_check_failed(&err) {
        NoteStoreError::NotFound
    } else {
        NoteStoreError::Other(anyhow::Error::new(err).context(action))
    }
}

#[derive(Clone, Debug)]
pub struct NotesTableClient {
    inner: dynamodb::Client,
    table: String,
}

#[cfg_attr(test, automock)]
impl NotesTableClient {
    pub fn new(inner: dynamodb::Client, table: String) -> Self {
        Self { inner, table }
    }

    /// Inserts a new note, refusing to overwrite an existing key
    #[tracing::instrument(skip(self, note))]
    pub async fn put_note(&self, note: &Note) -> Result<(), NoteStoreError> {
        put_note::put_note(&self.inner, &self.table, note).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_note(&self, note_id: &str) -> Result<Note, NoteStoreError> {
        get_note::get_note(&self.inner, &self.table, note_id).await
    }

    /// Every note, newest sort key first
    #[tracing::instrument(skip(self))]
    pub async fn list_notes(&self) -> Result<Vec<Note>, NoteStoreError> {
        list_notes::list_notes(&self.inner, &self.table).await
    }

    /// Applies the update to an existing note and returns the stored result
    #[tracing::instrument(skip(self))]
    pub async fn update_note(
        &self,
        note_id: &str,
        update: &NoteUpdate,
    ) -> Result<Note, NoteStoreError> {
        update_note::update_note(&self.inner, &self.table, note_id, update).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_note(&self, note_id: &str) -> Result<(), NoteStoreError> {
        delete_note::delete_note(&self.inner, &self.table, note_id).await
    }
}
