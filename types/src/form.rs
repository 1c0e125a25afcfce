//! Create/edit lifecycle for the category form, independent of any UI.
//!
//! A submit is split in two halves around the network call:
//! [`CategoryForm::begin_submit`] validates and hands out the request,
//! [`CategoryForm::settle`] consumes its result. `loading` is true exactly
//! between the two, which is what keeps a second submit from going out.

use dioxus::prelude::ServerFnError;
use serde::{Deserialize, Serialize};

use crate::{
    category::{Category, CategoryDraft, CategoryFields, CategoryId},
    notice::{Notice, NotificationSink},
    validation::{Field, Validation, validate},
};

pub const SAVE_FAILED: &str = "Failed to save category";

/// A rejected create/update call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestError {
    /// Human-readable reason supplied by the server, if any.
    pub message: Option<String>,
    pub unauthorized: bool,
}

impl RequestError {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            unauthorized: false,
        }
    }

    /// The server's message, or a generic fallback.
    pub fn user_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(SAVE_FAILED)
    }
}

impl From<ServerFnError> for RequestError {
    fn from(error: ServerFnError) -> Self {
        match error {
            ServerFnError::ServerError { message, code, .. } => Self {
                message: Some(message),
                unauthorized: code == 401,
            },
            other => {
                tracing::warn!(error = %other, "category request failed without a server message");
                Self::default()
            }
        }
    }
}

/// The remote side of the form.
#[allow(async_fn_in_trait)]
pub trait CategoryApi {
    async fn create_category(&self, fields: CategoryFields) -> Result<Category, RequestError>;

    async fn update_category(
        &self,
        id: &CategoryId,
        fields: CategoryFields,
    ) -> Result<Category, RequestError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: CategoryId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(CategoryFields),
    Update { id: CategoryId, fields: CategoryFields },
}

impl SubmitRequest {
    /// Issue exactly one create or update call.
    pub async fn dispatch(self, api: &impl CategoryApi) -> Result<Category, RequestError> {
        match self {
            SubmitRequest::Create(fields) => api.create_category(fields).await,
            SubmitRequest::Update { id, fields } => api.update_category(&id, fields).await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already in flight.
    Busy,
    /// The draft failed validation; errors are on the form.
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved { category: Category, notice: Notice },
    Failed { error: RequestError, notice: Notice },
}

impl SubmitOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            SubmitOutcome::Saved { notice, .. } | SubmitOutcome::Failed { notice, .. } => notice,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }

    /// Hand a settled submit to the dialog's owner.
    ///
    /// The notice always goes to `sink`. A save calls `on_success` and then
    /// closes the dialog; a failure leaves it open, and an unauthorized one
    /// also calls `on_unauthorized`.
    pub fn report(
        &self,
        sink: &mut impl NotificationSink,
        on_success: impl FnOnce(),
        on_open_change: impl FnOnce(bool),
        on_unauthorized: impl FnOnce(),
    ) {
        self.notice().deliver(sink);
        match self {
            SubmitOutcome::Saved { .. } => {
                on_success();
                on_open_change(false);
            }
            SubmitOutcome::Failed { error, .. } if error.unauthorized => on_unauthorized(),
            SubmitOutcome::Failed { .. } => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    mode: FormMode,
    draft: CategoryDraft,
    validation: Validation,
    loading: bool,
}

impl CategoryForm {
    pub fn new(category: Option<&Category>) -> Self {
        match category {
            Some(category) => Self {
                mode: FormMode::Edit {
                    id: category.id.clone(),
                },
                draft: CategoryDraft::from(category),
                validation: Validation::default(),
                loading: false,
            },
            None => Self {
                mode: FormMode::Create,
                draft: CategoryDraft::default(),
                validation: Validation::default(),
                loading: false,
            },
        }
    }

    /// Re-derive mode and draft from the (possibly updated) entity.
    ///
    /// Ignored while a submission is in flight.
    pub fn reopen(&mut self, category: Option<&Category>) {
        if !self.loading {
            *self = Self::new(category);
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn draft(&self) -> &CategoryDraft {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.validation.error(field)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.validation.field_errors.remove(&Field::Name);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.validation.field_errors.remove(&Field::Description);
    }

    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::Busy);
        }

        self.validation = validate(&self.draft);
        if !self.validation.is_valid() {
            return Err(SubmitBlocked::Invalid);
        }

        self.loading = true;
        let fields = self.draft.to_fields();
        Ok(match &self.mode {
            FormMode::Create => SubmitRequest::Create(fields),
            FormMode::Edit { id } => SubmitRequest::Update {
                id: id.clone(),
                fields,
            },
        })
    }

    pub fn settle(&mut self, result: Result<Category, RequestError>) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(category) => {
                let notice = match self.mode {
                    FormMode::Create => Notice::success("Category created"),
                    FormMode::Edit { .. } => Notice::success("Category updated"),
                };
                self.draft = CategoryDraft::default();
                self.validation = Validation::default();
                tracing::info!(id = %category.id, "category saved");
                SubmitOutcome::Saved { category, notice }
            }
            Err(error) => {
                let notice = Notice::error(error.user_message());
                tracing::warn!(?error, "category save failed");
                SubmitOutcome::Failed { error, notice }
            }
        }
    }

    pub fn can_cancel(&self) -> bool {
        !self.loading
    }

    /// Discard uncommitted edits. Returns false while a submission is in flight.
    pub fn cancel(&mut self) -> bool {
        if !self.can_cancel() {
            return false;
        }
        self.draft = CategoryDraft::default();
        self.validation = Validation::default();
        true
    }
}
