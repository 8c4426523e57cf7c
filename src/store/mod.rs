pub mod seed;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateStatus, ExperienceLevel};
use crate::models::communication::{Communication, CommunicationType};
use crate::models::note::Note;
use crate::models::reporting::{Activity, DepartmentMetric, Document, FunnelStage, TimelinePoint};
use crate::models::supplier::Supplier;
use crate::models::user::User;

/// In-memory system of record for the session. All reads hand out clones so
/// callers never hold a reference into the collections; all mutation goes
/// through this type, which owns the id counters.
///
/// Identifiers are monotonic and never reused after a deletion.
pub struct EntityStore {
    inner: RwLock<Collections>,
}

pub struct Collections {
    pub candidates: Vec<Candidate>,
    pub suppliers: Vec<Supplier>,
    pub notes: Vec<Note>,
    pub communications: Vec<Communication>,
    pub documents: Vec<Document>,
    pub activities: Vec<Activity>,
    pub department_metrics: Vec<DepartmentMetric>,
    pub funnel: Vec<FunnelStage>,
    pub timeline: Vec<TimelinePoint>,
    pub users: Vec<User>,
    pub next_candidate_id: i64,
    pub next_note_id: i64,
    pub next_communication_id: i64,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            suppliers: Vec::new(),
            notes: Vec::new(),
            communications: Vec::new(),
            documents: Vec::new(),
            activities: Vec::new(),
            department_metrics: Vec::new(),
            funnel: Vec::new(),
            timeline: Vec::new(),
            users: Vec::new(),
            next_candidate_id: 1,
            next_note_id: 1,
            next_communication_id: 1,
        }
    }
}

impl EntityStore {
    /// Validates every record before accepting the collections; the store is
    /// the trust boundary for the data invariants.
    pub fn new(collections: Collections) -> Result<Self> {
        for candidate in &collections.candidates {
            validate_candidate(candidate)?;
        }
        for supplier in &collections.suppliers {
            validate_supplier(supplier)?;
        }
        for note in &collections.notes {
            if note.content.trim().is_empty() {
                return Err(Error::BadRequest("Note content cannot be empty".into()));
            }
        }
        Ok(Self {
            inner: RwLock::new(collections),
        })
    }

    pub fn seeded() -> Result<Self> {
        Self::new(seed::collections()?)
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().expect("store lock poisoned")
    }

    // Candidates

    pub fn candidates(&self) -> Vec<Candidate> {
        self.read().candidates.clone()
    }

    pub fn candidate(&self, id: i64) -> Option<Candidate> {
        self.read().candidates.iter().find(|c| c.id == id).cloned()
    }

    /// Registration side effect: a candidate-like row tied to the new user.
    pub fn create_applicant(&self, user: &User) -> Result<Candidate> {
        let mut inner = self.write();
        let candidate = Candidate {
            id: inner.next_candidate_id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            position: "Applicant".to_string(),
            department: user.department.clone(),
            location: String::new(),
            status: CandidateStatus::New,
            applied_date: Utc::now().date_naive(),
            experience_level: ExperienceLevel::EntryLevel,
            skills: Vec::new(),
            rating: 0,
            ats_score: 0,
            about: None,
            experience: None,
            education: None,
            process: None,
            user_id: Some(user.id),
        };
        validate_candidate(&candidate)?;
        inner.next_candidate_id += 1;
        inner.candidates.push(candidate.clone());
        Ok(candidate)
    }

    // Suppliers

    pub fn suppliers(&self) -> Vec<Supplier> {
        self.read().suppliers.clone()
    }

    pub fn supplier(&self, id: i64) -> Option<Supplier> {
        self.read().suppliers.iter().find(|s| s.id == id).cloned()
    }

    // Notes

    pub fn notes_for(&self, candidate_id: i64) -> Vec<Note> {
        self.read()
            .notes
            .iter()
            .filter(|n| n.candidate_id == candidate_id)
            .cloned()
            .collect()
    }

    pub fn add_note(&self, candidate_id: i64, content: &str, author: &User) -> Result<Note> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::BadRequest("Note content cannot be empty".into()));
        }
        let mut inner = self.write();
        if !inner.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(Error::NotFound("Candidate not found".into()));
        }
        let note = Note {
            id: inner.next_note_id,
            candidate_id,
            content: content.to_string(),
            created_by: author.id,
            created_by_name: author.name.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.next_note_id += 1;
        inner.notes.push(note.clone());
        Ok(note)
    }

    /// Content and `updated_at` change; id and author are immutable. Only the
    /// author may edit.
    pub fn update_note(&self, note_id: i64, content: &str, editor: Uuid) -> Result<Note> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::BadRequest("Note content cannot be empty".into()));
        }
        let mut inner = self.write();
        let note = inner
            .notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| Error::NotFound("Note not found".into()))?;
        if note.created_by != editor {
            return Err(Error::Forbidden("Only the author can edit a note".into()));
        }
        note.content = content.to_string();
        note.updated_at = Some(Utc::now());
        Ok(note.clone())
    }

    pub fn delete_note(&self, note_id: i64, editor: Uuid) -> Result<()> {
        let mut inner = self.write();
        let index = inner
            .notes
            .iter()
            .position(|n| n.id == note_id)
            .ok_or_else(|| Error::NotFound("Note not found".into()))?;
        if inner.notes[index].created_by != editor {
            return Err(Error::Forbidden("Only the author can delete a note".into()));
        }
        inner.notes.remove(index);
        Ok(())
    }

    // Communications (append-only)

    pub fn communications_for(&self, candidate_id: i64) -> Vec<Communication> {
        self.read()
            .communications
            .iter()
            .filter(|c| c.candidate_id == candidate_id)
            .cloned()
            .collect()
    }

    pub fn add_communication(
        &self,
        candidate_id: i64,
        kind: CommunicationType,
        subject: &str,
        content: &str,
        duration: Option<String>,
        sender: &User,
    ) -> Result<Communication> {
        let subject = subject.trim();
        let content = content.trim();
        if subject.is_empty() {
            return Err(Error::BadRequest("Subject cannot be empty".into()));
        }
        if content.is_empty() {
            return Err(Error::BadRequest("Content cannot be empty".into()));
        }
        let mut inner = self.write();
        if !inner.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(Error::NotFound("Candidate not found".into()));
        }
        let communication = Communication {
            id: inner.next_communication_id,
            candidate_id,
            kind,
            subject: subject.to_string(),
            content: content.to_string(),
            date: Utc::now(),
            sent_by: sender.id.to_string(),
            sent_by_name: sender.name.clone(),
            // Duration only carries meaning for calls.
            duration: match kind {
                CommunicationType::Call => duration,
                _ => None,
            },
        };
        inner.next_communication_id += 1;
        inner.communications.push(communication.clone());
        Ok(communication)
    }

    // Documents and reporting collections (seeded, read-only)

    pub fn documents_for(&self, candidate_id: i64) -> Vec<Document> {
        self.read()
            .documents
            .iter()
            .filter(|d| d.candidate_id == candidate_id)
            .cloned()
            .collect()
    }

    pub fn activities(&self) -> Vec<Activity> {
        self.read().activities.clone()
    }

    pub fn department_metrics(&self) -> Vec<DepartmentMetric> {
        self.read().department_metrics.clone()
    }

    pub fn funnel(&self) -> Vec<FunnelStage> {
        self.read().funnel.clone()
    }

    pub fn timeline(&self) -> Vec<TimelinePoint> {
        self.read().timeline.clone()
    }

    /// The three aggregate counts behind the dashboard header: total
    /// candidates, candidates still in play, and hires.
    pub fn candidate_counts(&self) -> (i64, i64, i64) {
        let inner = self.read();
        let total = inner.candidates.len() as i64;
        let hired = inner
            .candidates
            .iter()
            .filter(|c| c.status == CandidateStatus::Hired)
            .count() as i64;
        let active = inner
            .candidates
            .iter()
            .filter(|c| {
                !matches!(
                    c.status,
                    CandidateStatus::Hired | CandidateStatus::Rejected
                )
            })
            .count() as i64;
        (total, active, hired)
    }

    // Users

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.read()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub fn user_by_id(&self, id: Uuid) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn insert_user(&self, user: User) -> Result<User> {
        let mut inner = self.write();
        if inner
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(Error::BadRequest(
                "A user with this email address already exists".into(),
            ));
        }
        inner.users.push(user.clone());
        Ok(user)
    }
}

fn validate_candidate(candidate: &Candidate) -> Result<()> {
    candidate.validate()?;
    Ok(())
}

fn validate_supplier(supplier: &Supplier) -> Result<()> {
    supplier.validate()?;
    if supplier.price.is_sign_negative() {
        return Err(Error::BadRequest(format!(
            "Supplier {} has a negative price",
            supplier.id
        )));
    }
    Ok(())
}
