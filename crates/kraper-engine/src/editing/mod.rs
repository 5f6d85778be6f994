/*!
 * # Editing Session
 *
 * The workspace shows a paper two ways: a structured preview rendered from
 * the section collection, and the raw LaTeX source the user can edit. The
 * section collection is the source of truth except right after a recompile,
 * when the edited source is.
 *
 * [`EditorSession`] owns both and runs every section change through
 * [`SyncState`], a two-state machine:
 *
 * - `Idle --section change--> Idle`: re-derive the source via the serializer
 * - `Idle --recompile--> Suppressing`: armed just before recompiled sections
 *   are committed
 * - `Suppressing --section change--> Idle`: skip exactly one re-derivation
 *
 * Without the suppression, committing recompiled sections would immediately
 * regenerate the source and overwrite the user's edits (comments, spacing,
 * anything the serializer would not reproduce).
 *
 * All of this is synchronous; change notifications arrive one at a time.
 */

pub mod session;

pub use session::{EditorSession, SyncAction, SyncState, View};
