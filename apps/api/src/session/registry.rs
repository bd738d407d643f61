//! In-memory session registry.
//!
//! The map itself sits behind a `RwLock`; each session has its own `Mutex`, so a slow
//! regeneration call on one session never blocks reads or edits of another.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::llm_client::TextGenerator;
use crate::sections::{Section, StoreError};
use crate::session::{ExportDocument, Session, SessionView};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}

type SessionHandle = Arc<Mutex<Session>>;

#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: Session) -> Uuid {
        let id = session.id;
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        info!(session_id = %id, "session created");
        id
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn handle(&self, id: Uuid) -> Result<SessionHandle, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }

    pub async fn view(&self, id: Uuid) -> Result<SessionView, SessionError> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        Ok(session.view())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or(SessionError::NotFound(id))?;
        info!(session_id = %id, "session discarded");
        Ok(())
    }

    pub async fn edit_section(
        &self,
        id: Uuid,
        name: &str,
        content: &str,
    ) -> Result<Section, SessionError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.sections.edit(name, content)?;
        Ok(current_section(&session, name))
    }

    /// Holds only this session's lock across the model call.
    pub async fn regenerate_section(
        &self,
        id: Uuid,
        name: &str,
        llm: &dyn TextGenerator,
    ) -> Result<Section, SessionError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.sections.regenerate_one(name, llm).await?;
        Ok(current_section(&session, name))
    }

    pub async fn reset_section(&self, id: Uuid, name: &str) -> Result<Section, SessionError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.sections.reset_one(name)?;
        Ok(current_section(&session, name))
    }

    pub async fn document_text(
        &self,
        id: Uuid,
        document: ExportDocument,
    ) -> Result<String, SessionError> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        Ok(session.document_text(document))
    }
}

fn current_section(session: &Session, name: &str) -> Section {
    Section {
        name: name.to_string(),
        content: session
            .sections
            .current()
            .get(name)
            .unwrap_or_default()
            .to_string(),
    }
}
