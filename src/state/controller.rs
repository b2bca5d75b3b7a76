//! Event-driven session lifecycle.
//!
//! The controller glues a [`NavSession`] to a [`Renderer`]: it draws the
//! opening page, applies navigation actions as they arrive, and redraws
//! after every accepted action. It also owns the inactivity clock; once a
//! session expires it rejects everything and the last rendered page stays
//! as-is.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::{NavAction, SessionError};
use crate::render::{NavStatus, PageView, Renderer};

use super::controls::NavControls;
use super::session::NavSession;

/// Inactivity window after which a session stops accepting actions.
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(180);

fn status_of(session: &NavSession) -> NavStatus {
    NavStatus {
        cursor: session.cursor().get(),
        page_count: session.page_count(),
        controls: NavControls::for_session(session),
    }
}

/// Drives a renderer from navigation actions for one session.
///
/// Every accepted action triggers exactly one redraw, including clamped
/// edge actions that leave the cursor in place. Rejected actions (expired
/// session, suppressed single-page controls) never touch the renderer.
pub struct SessionController<R: Renderer> {
    session: NavSession,
    renderer: R,
    handle: R::Handle,
    last_activity: Instant,
    timeout: Duration,
}

impl<R: Renderer> SessionController<R> {
    /// Open a session by rendering its first page.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's failure to draw the opening view; no
    /// controller exists in that case.
    pub fn open(session: NavSession, renderer: R, timeout: Duration) -> Result<Self, SessionError> {
        Self::open_at(session, renderer, timeout, Instant::now())
    }

    /// [`SessionController::open`] with an explicit clock, for tests that
    /// steer time.
    pub fn open_at(
        session: NavSession,
        mut renderer: R,
        timeout: Duration,
        now: Instant,
    ) -> Result<Self, SessionError> {
        let view = PageView {
            page: session.page(),
            status: status_of(&session),
        };
        let handle = renderer.render(view)?;
        debug!(pages = session.page_count(), "session opened");
        Ok(Self {
            session,
            renderer,
            handle,
            last_activity: now,
            timeout,
        })
    }

    /// Apply a navigation action and redraw the page it lands on.
    ///
    /// Returns the cursor index the session ends up at.
    ///
    /// # Errors
    ///
    /// Rejects actions on an expired session and on a single-page session,
    /// leaving the rendered output untouched. A renderer failure surfaces
    /// after the cursor has already moved.
    pub fn handle(&mut self, action: NavAction) -> Result<usize, SessionError> {
        self.handle_at(action, Instant::now())
    }

    /// [`SessionController::handle`] with an explicit clock.
    pub fn handle_at(&mut self, action: NavAction, now: Instant) -> Result<usize, SessionError> {
        if self.is_expired_at(now) {
            debug!(%action, "action on expired session rejected");
            return Err(SessionError::Expired);
        }
        if self.session.page_count() == 1 {
            debug!(%action, "action on single-page session rejected");
            return Err(SessionError::SinglePage);
        }
        let cursor = self.session.apply(action);
        self.last_activity = now;
        let view = PageView {
            page: self.session.page(),
            status: status_of(&self.session),
        };
        self.renderer.update(&mut self.handle, view)?;
        debug!(%action, cursor, "page redrawn");
        Ok(cursor)
    }

    /// True once the inactivity window has fully elapsed.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// [`SessionController::is_expired`] against an explicit clock.
    ///
    /// Expiry is strict: a session is still live at exactly the timeout.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.last_activity) > self.timeout
    }

    /// The navigated session.
    pub fn session(&self) -> &NavSession {
        &self.session
    }

    /// Cursor position and control availability, as handed to the renderer.
    pub fn status(&self) -> NavStatus {
        status_of(&self.session)
    }

    /// Control availability at the cursor, `None` when suppressed.
    pub fn controls(&self) -> Option<NavControls> {
        NavControls::for_session(&self.session)
    }

    /// The owned renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the owned renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{pages_of, RecordingRenderer};

    fn controller(page_count: usize) -> SessionController<RecordingRenderer> {
        let session = NavSession::new(pages_of(page_count)).expect("non-empty");
        SessionController::open(session, RecordingRenderer::new(), DEFAULT_SESSION_TIMEOUT)
            .expect("opens")
    }

    mod opening {
        use super::*;

        #[test]
        fn open_renders_the_first_page_once() {
            let controller = controller(3);

            let renders = &controller.renderer().renders;
            assert_eq!(renders.len(), 1);
            assert_eq!(renders[0].status.cursor, 0);
            assert_eq!(renders[0].status.page_count, 3);
            assert!(controller.renderer().updates.is_empty());
        }

        #[test]
        fn open_fails_when_the_first_render_fails() {
            let session = NavSession::new(pages_of(2)).expect("non-empty");
            let mut renderer = RecordingRenderer::new();
            renderer.fail_next_render = true;

            let result = SessionController::open(session, renderer, DEFAULT_SESSION_TIMEOUT);

            assert!(matches!(result, Err(SessionError::Render(_))));
        }
    }

    mod actions {
        use super::*;

        #[test]
        fn accepted_action_redraws_exactly_once() {
            let mut controller = controller(3);

            let cursor = controller.handle(NavAction::Next).expect("accepted");

            assert_eq!(cursor, 1);
            let updates = &controller.renderer().updates;
            assert_eq!(updates.len(), 1);
            assert_eq!(updates[0].status.cursor, 1);
            assert_eq!(updates[0].page.title(), "Page 1");
        }

        #[test]
        fn clamped_edge_action_still_redraws() {
            let mut controller = controller(3);

            let cursor = controller.handle(NavAction::Prev).expect("accepted");

            assert_eq!(cursor, 0);
            assert_eq!(controller.renderer().updates.len(), 1);
            assert_eq!(controller.renderer().updates[0].status.cursor, 0);
        }

        #[test]
        fn each_accepted_action_adds_one_update() {
            let mut controller = controller(4);

            for action in [
                NavAction::Next,
                NavAction::Next,
                NavAction::Last,
                NavAction::Prev,
                NavAction::First,
            ] {
                controller.handle(action).expect("accepted");
            }

            let cursors: Vec<usize> = controller
                .renderer()
                .updates
                .iter()
                .map(|u| u.status.cursor)
                .collect();
            assert_eq!(cursors, vec![1, 2, 3, 2, 0]);
        }

        #[test]
        fn single_page_session_rejects_every_action() {
            let mut controller = controller(1);

            for action in NavAction::ALL {
                let result = controller.handle(action);
                assert!(matches!(result, Err(SessionError::SinglePage)));
            }
            assert!(controller.renderer().updates.is_empty());
        }

        #[test]
        fn update_failure_surfaces_after_the_cursor_moved() {
            let mut controller = controller(3);
            controller.renderer_mut().fail_next_update = true;

            let result = controller.handle(NavAction::Next);

            assert!(matches!(result, Err(SessionError::Render(_))));
            assert_eq!(controller.status().cursor, 1);
        }
    }

    mod expiry {
        use super::*;

        fn controller_at(
            page_count: usize,
            opened: Instant,
        ) -> SessionController<RecordingRenderer> {
            let session = NavSession::new(pages_of(page_count)).expect("non-empty");
            SessionController::open_at(
                session,
                RecordingRenderer::new(),
                DEFAULT_SESSION_TIMEOUT,
                opened,
            )
            .expect("opens")
        }

        #[test]
        fn session_is_live_at_exactly_the_timeout() {
            let opened = Instant::now();
            let mut controller = controller_at(3, opened);

            let at_timeout = opened + DEFAULT_SESSION_TIMEOUT;
            assert!(!controller.is_expired_at(at_timeout));
            assert!(controller.handle_at(NavAction::Next, at_timeout).is_ok());
        }

        #[test]
        fn expired_session_rejects_without_redrawing() {
            let opened = Instant::now();
            let mut controller = controller_at(3, opened);

            let late = opened + DEFAULT_SESSION_TIMEOUT + Duration::from_secs(1);
            assert!(controller.is_expired_at(late));

            let result = controller.handle_at(NavAction::Next, late);

            assert!(matches!(result, Err(SessionError::Expired)));
            assert!(controller.renderer().updates.is_empty());
        }

        #[test]
        fn accepted_activity_restarts_the_inactivity_window() {
            let opened = Instant::now();
            let mut controller = controller_at(3, opened);

            let mid = opened + Duration::from_secs(100);
            controller.handle_at(NavAction::Next, mid).expect("live");

            // 250s after opening but only 150s after the last action.
            let later = opened + Duration::from_secs(250);
            assert!(!controller.is_expired_at(later));
            assert!(controller.handle_at(NavAction::Next, later).is_ok());
        }

        #[test]
        fn rejection_does_not_count_as_activity() {
            let opened = Instant::now();
            let mut controller = controller_at(1, opened);

            // Rejected on the single-page session, so the clock keeps running.
            let mid = opened + Duration::from_secs(100);
            let _ = controller.handle_at(NavAction::Next, mid);

            let late = opened + DEFAULT_SESSION_TIMEOUT + Duration::from_secs(1);
            assert!(controller.is_expired_at(late));
        }

        #[test]
        fn custom_timeout_is_honored() {
            let opened = Instant::now();
            let session = NavSession::new(pages_of(2)).expect("non-empty");
            let mut controller = SessionController::open_at(
                session,
                RecordingRenderer::new(),
                Duration::from_secs(5),
                opened,
            )
            .expect("opens");

            let late = opened + Duration::from_secs(6);
            let result = controller.handle_at(NavAction::Next, late);
            assert!(matches!(result, Err(SessionError::Expired)));
        }
    }
}
