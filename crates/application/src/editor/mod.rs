//! Workspace state controller.
//!
//! [`RequestEditor`] holds the authoritative request-composition state and
//! is the single point every edit path routes through. The structured
//! query-parameter list is the source of truth; the action URL and the bulk
//! text are views derived from it, except where the user is editing those
//! views directly, in which case the list is re-derived and reconciled
//! against its previous contents.
//!
//! All entry points run synchronously to completion, take primitive
//! arguments from the renderer, and return nothing: the renderer re-reads
//! the snapshot accessors after every call (one-way data flow). Every
//! transform produces a new list which the editor installs, so no renderer
//! snapshot can alias the authoritative copy.

pub mod reconcile;

use satchel_domain::request::{action, codec};
use satchel_domain::{HttpMethod, ParamField, PathVariables, QueryParams, VariableField};

use crate::error::ApplicationResult;
use crate::ports::{DispatchResponse, RequestDispatcher};

use reconcile::reconcile_query_params;

/// Which editor is rendered for a parameter group.
///
/// A pure view toggle: switching editors never changes the underlying
/// structured state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorView {
    /// The structured key/value table.
    #[default]
    Table,
    /// The plain-text bulk editor.
    BulkText,
}

impl EditorView {
    /// Returns the other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Table => Self::BulkText,
            Self::BulkText => Self::Table,
        }
    }
}

/// The request-composition state and its edit entry points.
#[derive(Debug, Clone, Default)]
pub struct RequestEditor {
    method: HttpMethod,
    action: String,
    path_variables: PathVariables,
    query_params: QueryParams,
    bulk_text: String,
    query_view: EditorView,
    variables_view: EditorView,
}

impl RequestEditor {
    /// Creates an editor with an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Snapshots ────────────────────────────────────────────────────

    /// The selected HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// The action URL the request would be submitted to.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Path variables extracted from the URL template.
    #[must_use]
    pub const fn path_variables(&self) -> &PathVariables {
        &self.path_variables
    }

    /// The structured query-parameter list.
    #[must_use]
    pub const fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    /// The bulk-text rendition of the query parameters.
    #[must_use]
    pub fn bulk_text(&self) -> &str {
        &self.bulk_text
    }

    /// Which editor is shown for the query-parameter group.
    #[must_use]
    pub const fn query_view(&self) -> EditorView {
        self.query_view
    }

    /// Which editor is shown for the path-variable group.
    #[must_use]
    pub const fn variables_view(&self) -> EditorView {
        self.variables_view
    }

    // ── Method / view toggles ────────────────────────────────────────

    /// Selects the HTTP method.
    pub fn set_method(&mut self, method: HttpMethod) {
        self.method = method;
    }

    /// Switches the query-parameter group between table and bulk editor.
    pub fn toggle_query_view(&mut self) {
        self.query_view = self.query_view.toggled();
    }

    /// Switches the path-variable group between table and bulk editor.
    pub fn toggle_variables_view(&mut self) {
        self.variables_view = self.variables_view.toggled();
    }

    // ── URL edits ────────────────────────────────────────────────────

    /// Handles the URL field being edited.
    ///
    /// The action is taken verbatim; path variables and query parameters
    /// are re-derived from it. A string that does not parse as a URL is an
    /// expected mid-typing state and degrades to empty parses, which still
    /// run through reconciliation so disabled rows survive. The bulk text
    /// is re-encoded from the reconciled list.
    pub fn edit_url(&mut self, action: &str) {
        tracing::trace!(action, "url field edited");
        self.action = action.to_string();
        self.path_variables = codec::path_variables_from_url(action).unwrap_or_default();

        let incoming = codec::query_params_from_url(action).unwrap_or_default();
        let merged = reconcile_query_params(&incoming, &self.query_params);
        self.bulk_text = codec::encode_bulk_text(&merged);
        self.query_params = merged;
    }

    // ── Table edits ──────────────────────────────────────────────────

    /// Handles a single-cell edit of an existing table row.
    ///
    /// An out-of-range index is a silent no-op.
    pub fn edit_param(&mut self, index: usize, field: ParamField, text: &str) {
        if index >= self.query_params.len() {
            return;
        }
        self.install_params(self.query_params.with_field(index, field, text));
    }

    /// Handles the perpetual trailing blank row being typed into.
    ///
    /// Appends a fresh enabled entry with the edited cell set.
    pub fn add_param(&mut self, field: ParamField, text: &str) {
        self.install_params(self.query_params.with_appended(field, text));
    }

    /// Enables or disables the row at `index`.
    ///
    /// Disabled rows stay in the table and bulk text but drop out of the
    /// synthesized action. An out-of-range index is a silent no-op.
    pub fn set_param_enabled(&mut self, index: usize, enabled: bool) {
        if index >= self.query_params.len() {
            return;
        }
        self.install_params(self.query_params.with_enabled(index, enabled));
    }

    /// Moves the row at `index` to `target` by swapping the two rows.
    ///
    /// A target outside `[0, len)` is a silent no-op, which makes moving
    /// the first row up and the last row down safe.
    pub fn move_param(&mut self, index: usize, target: isize) {
        let Ok(target) = usize::try_from(target) else {
            return;
        };
        if index >= self.query_params.len() || target >= self.query_params.len() {
            return;
        }
        self.install_params(self.query_params.with_swapped(index, target));
    }

    /// Removes the row at `index`.
    ///
    /// An out-of-range index is a silent no-op.
    pub fn remove_param(&mut self, index: usize) {
        if index >= self.query_params.len() {
            return;
        }
        self.install_params(self.query_params.without(index));
    }

    /// Removes the row at `index` on blur, but only when both its key and
    /// value are empty strings — a half-filled row is one the user is
    /// still typing into.
    pub fn remove_param_if_blank(&mut self, index: usize) {
        let is_blank = self.query_params.get(index).is_some_and(|p| p.is_blank());
        if is_blank {
            self.install_params(self.query_params.without(index));
        }
    }

    // ── Bulk edits ───────────────────────────────────────────────────

    /// Handles the bulk textarea being edited.
    ///
    /// The structured list is decoded from the text (descriptions inherited
    /// positionally from the current list) and the action resynthesized.
    /// The bulk text itself is stored verbatim rather than re-encoded, so
    /// the editor never fights the user's in-progress typing.
    pub fn edit_bulk_text(&mut self, text: &str) {
        let params = codec::decode_bulk_text(text, &self.query_params);
        let base = action::base_path(&self.action).to_string();
        self.action = action::synthesize_action(&base, &params);
        self.query_params = params;
        self.bulk_text = text.to_string();
    }

    // ── Path variable edits ──────────────────────────────────────────

    /// Handles a value or description edit of a path-variable row.
    ///
    /// Path variables are documentation-only here: editing them never
    /// touches the action or the query parameters.
    pub fn edit_path_variable(&mut self, index: usize, field: VariableField, text: &str) {
        self.path_variables = self.path_variables.with_field(index, field, text);
    }

    // ── Submission ───────────────────────────────────────────────────

    /// Hands the composed request to the transport port.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's error untouched; the editor neither
    /// retries nor interprets responses.
    pub async fn submit<D: RequestDispatcher>(
        &self,
        dispatcher: &D,
    ) -> ApplicationResult<DispatchResponse> {
        tracing::debug!(method = %self.method, action = %self.action, "dispatching request");
        Ok(dispatcher.dispatch(self.method, &self.action).await?)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Installs a new parameter list and regenerates its derived views.
    fn install_params(&mut self, params: QueryParams) {
        let base = action::base_path(&self.action).to_string();
        self.action = action::synthesize_action(&base, &params);
        self.bulk_text = codec::encode_bulk_text(&params);
        self.query_params = params;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use satchel_domain::QueryParam;
    use pretty_assertions::assert_eq;

    fn editor_with_url(url: &str) -> RequestEditor {
        let mut editor = RequestEditor::new();
        editor.edit_url(url);
        editor
    }

    #[test]
    fn test_new_editor_is_empty() {
        let editor = RequestEditor::new();
        assert_eq!(editor.method(), HttpMethod::Get);
        assert!(editor.action().is_empty());
        assert!(editor.query_params().is_empty());
        assert!(editor.path_variables().is_empty());
        assert!(editor.bulk_text().is_empty());
    }

    #[test]
    fn test_edit_url_derives_params_and_variables() {
        let editor = editor_with_url("https://api.example.com/users/:id?page=1&limit=10");

        assert_eq!(editor.query_params().len(), 2);
        assert_eq!(editor.query_params().get(0).unwrap().key, "page");
        assert_eq!(editor.path_variables().len(), 1);
        assert_eq!(editor.path_variables().get(0).unwrap().key, "id");
        assert_eq!(editor.bulk_text(), "page:1\nlimit:10");
    }

    #[test]
    fn test_edit_url_preserves_disabled_params() {
        let mut editor = editor_with_url("https://api.example.com/users?a=1&b=2");
        editor.set_param_enabled(0, false);

        editor.edit_url("https://api.example.com/users?b=2");

        assert_eq!(editor.query_params().len(), 2);
        assert!(
            editor
                .query_params()
                .all()
                .contains(&QueryParam::disabled("a", "1"))
        );
    }

    #[test]
    fn test_invalid_url_keeps_disabled_params_only() {
        let mut editor = editor_with_url("https://api.example.com/users?a=1&b=2");
        editor.set_param_enabled(0, false);

        // Mid-typing state: not parseable as a URL
        editor.edit_url("https:/");

        assert_eq!(editor.action(), "https:/");
        assert!(editor.path_variables().is_empty());
        assert_eq!(editor.query_params().len(), 1);
        assert_eq!(editor.query_params().get(0).unwrap().key, "a");
        assert!(!editor.query_params().get(0).unwrap().enabled);
    }

    #[test]
    fn test_toggle_param_rewrites_action_and_bulk() {
        let mut editor = editor_with_url("https://api.example.com/users?page=1&limit=10");

        editor.set_param_enabled(0, false);

        assert_eq!(editor.action(), "https://api.example.com/users?limit=10");
        assert_eq!(editor.bulk_text(), "#page:1\nlimit:10");

        editor.set_param_enabled(0, true);

        assert_eq!(
            editor.action(),
            "https://api.example.com/users?page=1&limit=10"
        );
        assert_eq!(editor.bulk_text(), "page:1\nlimit:10");
    }

    #[test]
    fn test_edit_param_cell() {
        let mut editor = editor_with_url("https://api.example.com/users?page=1");

        editor.edit_param(0, ParamField::Value, "2");
        assert_eq!(editor.action(), "https://api.example.com/users?page=2");

        editor.edit_param(0, ParamField::Description, "which page");
        assert_eq!(
            editor.query_params().get(0).unwrap().description,
            "which page"
        );
        // Descriptions never show up in the action
        assert_eq!(editor.action(), "https://api.example.com/users?page=2");
    }

    #[test]
    fn test_edit_param_out_of_range_is_noop() {
        let mut editor = editor_with_url("https://api.example.com/users?page=1");
        let before = editor.clone();

        editor.edit_param(7, ParamField::Key, "x");

        assert_eq!(editor.action(), before.action());
        assert_eq!(editor.query_params(), before.query_params());
    }

    #[test]
    fn test_add_param_via_trailing_row() {
        let mut editor = editor_with_url("https://api.example.com/users");

        editor.add_param(ParamField::Key, "q");

        assert_eq!(editor.query_params().len(), 1);
        assert_eq!(editor.action(), "https://api.example.com/users?q=");
        assert_eq!(editor.bulk_text(), "q:");
    }

    #[test]
    fn test_move_param_swaps_rows() {
        let mut editor = editor_with_url("https://api.example.com/users?a=1&b=2");

        editor.move_param(1, 0);

        assert_eq!(editor.action(), "https://api.example.com/users?b=2&a=1");
        assert_eq!(editor.bulk_text(), "b:2\na:1");
    }

    #[test]
    fn test_move_param_boundary_is_noop() {
        let mut editor = editor_with_url("https://api.example.com/users?a=1&b=2");
        let before = editor.query_params().clone();

        // First row up and last row down both point outside the list
        editor.move_param(0, -1);
        editor.move_param(1, 2);

        assert_eq!(editor.query_params(), &before);
    }

    #[test]
    fn test_remove_param() {
        let mut editor = editor_with_url("https://api.example.com/users?a=1&b=2");

        editor.remove_param(0);

        assert_eq!(editor.query_params().len(), 1);
        assert_eq!(editor.action(), "https://api.example.com/users?b=2");
    }

    #[test]
    fn test_remove_param_if_blank_threshold() {
        let mut editor = editor_with_url("https://api.example.com/users");
        editor.add_param(ParamField::Key, "x");
        editor.edit_param(0, ParamField::Key, "");

        // Key and value both empty now: blur removes the row
        editor.remove_param_if_blank(0);
        assert!(editor.query_params().is_empty());

        editor.add_param(ParamField::Key, "x");
        editor.remove_param_if_blank(0);
        assert_eq!(editor.query_params().len(), 1);
    }

    #[test]
    fn test_edit_bulk_text_keeps_raw_text() {
        let mut editor = editor_with_url("https://api.example.com/users");

        editor.edit_bulk_text("q:test\n#p:1");

        // Raw text is stored verbatim, not re-encoded
        assert_eq!(editor.bulk_text(), "q:test\n#p:1");
        assert_eq!(editor.query_params().len(), 2);
        assert_eq!(editor.action(), "https://api.example.com/users?q=test");
        assert!(!editor.query_params().get(1).unwrap().enabled);
    }

    #[test]
    fn test_edit_bulk_text_inherits_descriptions_by_position() {
        let mut editor = editor_with_url("https://api.example.com/users?a=1");
        editor.edit_param(0, ParamField::Description, "first note");

        editor.edit_bulk_text("b:2\nc:3");

        assert_eq!(editor.query_params().get(0).unwrap().description, "first note");
        assert_eq!(editor.query_params().get(1).unwrap().description, "");
    }

    #[test]
    fn test_edit_path_variable_leaves_request_alone() {
        let mut editor = editor_with_url("https://api.example.com/users/:id?page=1");

        editor.edit_path_variable(0, VariableField::Value, "42");
        editor.edit_path_variable(0, VariableField::Description, "user id");

        assert_eq!(editor.path_variables().get(0).unwrap().value, "42");
        assert_eq!(editor.action(), "https://api.example.com/users/:id?page=1");
        assert_eq!(editor.query_params().len(), 1);
    }

    #[test]
    fn test_view_toggles_do_not_touch_state() {
        let mut editor = editor_with_url("https://api.example.com/users?a=1");
        let params = editor.query_params().clone();

        assert_eq!(editor.query_view(), EditorView::Table);
        editor.toggle_query_view();
        assert_eq!(editor.query_view(), EditorView::BulkText);
        editor.toggle_variables_view();
        assert_eq!(editor.variables_view(), EditorView::BulkText);

        assert_eq!(editor.query_params(), &params);
    }

    #[test]
    fn test_set_method() {
        let mut editor = RequestEditor::new();
        editor.set_method(HttpMethod::Post);
        assert_eq!(editor.method(), HttpMethod::Post);
    }
}
