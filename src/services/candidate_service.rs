use std::sync::Arc;

use crate::error::{Error, Result};
use crate::filters::candidate::{self, CandidateFilter, CandidateSort};
use crate::models::candidate::Candidate;
use crate::models::communication::{Communication, CommunicationType};
use crate::models::note::Note;
use crate::models::reporting::Document;
use crate::models::user::User;
use crate::store::EntityStore;

#[derive(Clone)]
pub struct CandidateService {
    store: Arc<EntityStore>,
}

impl CandidateService {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Candidate> {
        self.store.candidates()
    }

    pub fn get(&self, id: i64) -> Result<Candidate> {
        self.store
            .candidate(id)
            .ok_or_else(|| Error::NotFound("Candidate not found".into()))
    }

    /// Runs the full pipeline over the current collection: search, filter,
    /// sort. The store is never mutated by a search.
    pub fn search(
        &self,
        filter: &CandidateFilter,
        query: &str,
        sort: CandidateSort,
    ) -> Vec<Candidate> {
        candidate::apply(&self.store.candidates(), filter, query, sort)
    }

    pub fn notes(&self, candidate_id: i64) -> Result<Vec<Note>> {
        self.get(candidate_id)?;
        Ok(self.store.notes_for(candidate_id))
    }

    pub fn add_note(&self, candidate_id: i64, content: &str, author: &User) -> Result<Note> {
        self.store.add_note(candidate_id, content, author)
    }

    pub fn update_note(&self, note_id: i64, content: &str, editor: &User) -> Result<Note> {
        self.store.update_note(note_id, content, editor.id)
    }

    pub fn delete_note(&self, note_id: i64, editor: &User) -> Result<()> {
        self.store.delete_note(note_id, editor.id)
    }

    pub fn communications(&self, candidate_id: i64) -> Result<Vec<Communication>> {
        self.get(candidate_id)?;
        Ok(self.store.communications_for(candidate_id))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_communication(
        &self,
        candidate_id: i64,
        kind: CommunicationType,
        subject: &str,
        content: &str,
        duration: Option<String>,
        sender: &User,
    ) -> Result<Communication> {
        self.store
            .add_communication(candidate_id, kind, subject, content, duration, sender)
    }

    pub fn documents(&self, candidate_id: i64) -> Result<Vec<Document>> {
        self.get(candidate_id)?;
        Ok(self.store.documents_for(candidate_id))
    }
}
