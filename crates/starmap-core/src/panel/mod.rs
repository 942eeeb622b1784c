//! Single-active info panel state machine.
//!
//! The controller owns no DOM. Every operation returns the presentation
//! commands the frontend must execute, in order. Open and close animations
//! carry an [`AnimationTicket`]; completion is reported either by the
//! transition-end signal or by a timeout, and only the first report for the
//! live ticket is acted upon.

mod layout;
mod sheet;

pub use layout::{floating_rect, PanelRect};
pub use sheet::SheetDrag;

use crate::config::{DeviceClass, PanelConfig};
use crate::poi::PoiId;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationTicket(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelLayout {
    /// Bottom-anchored sheet with drag-to-dismiss.
    Sheet,
    /// Panel floating next to the POI's screen position.
    Floating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Opening {
        poi: PoiId,
        layout: PanelLayout,
        ticket: AnimationTicket,
    },
    Open {
        poi: PoiId,
        layout: PanelLayout,
    },
    Closing {
        poi: PoiId,
        layout: PanelLayout,
        ticket: AnimationTicket,
        queued: Option<PoiId>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelCommand {
    /// Remove any panel element left in the document.
    RemoveStray,
    /// Create and attach the panel for `poi`, then start its open animation.
    Mount {
        poi: PoiId,
        layout: PanelLayout,
        ticket: AnimationTicket,
    },
    /// Start the close animation of the attached panel.
    BeginClose { ticket: AnimationTicket },
    /// Detach the panel element.
    Unmount,
    /// Schedule the completion fallback for `ticket`.
    ArmTimeout { ticket: AnimationTicket, ms: i32 },
    /// Drop the pending timer and transition listener for `ticket`.
    CancelTimeout { ticket: AnimationTicket },
    /// Translate the sheet down by this many CSS px while dragging.
    SetSheetOffset(f32),
    /// Animate the sheet back to its resting position.
    SpringBack,
}

pub type PanelCommands = SmallVec<[PanelCommand; 6]>;

/// Which signal completed an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    TransitionEnd,
    Timeout,
}

pub struct InfoPanel {
    state: PanelState,
    cfg: PanelConfig,
    viewport_width: f32,
    next_ticket: u64,
    sheet_drag: Option<SheetDrag>,
}

impl InfoPanel {
    pub fn new(cfg: PanelConfig, viewport_width: f32) -> Self {
        Self {
            state: PanelState::Closed,
            cfg,
            viewport_width,
            next_ticket: 1,
            sheet_drag: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// POI whose panel is attached, whatever the animation phase.
    pub fn current(&self) -> Option<PoiId> {
        match self.state {
            PanelState::Closed => None,
            PanelState::Opening { poi, .. }
            | PanelState::Open { poi, .. }
            | PanelState::Closing { poi, .. } => Some(poi),
        }
    }

    pub fn queued(&self) -> Option<PoiId> {
        match self.state {
            PanelState::Closing { queued, .. } => queued,
            _ => None,
        }
    }

    pub fn layout(&self) -> Option<PanelLayout> {
        match self.state {
            PanelState::Closed => None,
            PanelState::Opening { layout, .. }
            | PanelState::Open { layout, .. }
            | PanelState::Closing { layout, .. } => Some(layout),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.state,
            PanelState::Opening { .. } | PanelState::Closing { .. }
        )
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    fn layout_for_viewport(&self) -> PanelLayout {
        match DeviceClass::from_viewport_width(self.viewport_width, self.cfg.breakpoint_px) {
            DeviceClass::Mobile => PanelLayout::Sheet,
            DeviceClass::Desktop => PanelLayout::Floating,
        }
    }

    fn issue_ticket(&mut self) -> AnimationTicket {
        let t = AnimationTicket(self.next_ticket);
        self.next_ticket += 1;
        t
    }

    /// Show `poi`. While another panel is attached the current one is closed
    /// and the request queued, replacing any earlier queued one. Only
    /// `Closing` carries the queue slot; a request made while opening or open
    /// moves there first.
    pub fn request(&mut self, poi: PoiId) -> PanelCommands {
        let mut out = PanelCommands::new();
        match self.state {
            PanelState::Closed => {
                let layout = self.layout_for_viewport();
                let ticket = self.issue_ticket();
                self.state = PanelState::Opening {
                    poi,
                    layout,
                    ticket,
                };
                self.sheet_drag = None;
                log::debug!("[panel] opening {:?} as {:?}", poi, layout);
                out.push(PanelCommand::RemoveStray);
                out.push(PanelCommand::Mount {
                    poi,
                    layout,
                    ticket,
                });
                out.push(PanelCommand::ArmTimeout {
                    ticket,
                    ms: self.cfg.open_timeout_ms,
                });
            }
            PanelState::Opening { .. } | PanelState::Open { .. } | PanelState::Closing { .. } => {
                out.extend(self.close());
                if let PanelState::Closing { ref mut queued, .. } = self.state {
                    *queued = Some(poi);
                }
                log::debug!("[panel] queued {:?}", poi);
            }
        }
        out
    }

    /// Close the attached panel. A queued request survives and is shown once
    /// the close completes. No-op when closed or already closing.
    pub fn close(&mut self) -> PanelCommands {
        let mut out = PanelCommands::new();
        match self.state {
            PanelState::Closed | PanelState::Closing { .. } => {}
            PanelState::Open { poi, layout } => {
                let ticket = self.issue_ticket();
                self.state = PanelState::Closing {
                    poi,
                    layout,
                    ticket,
                    queued: None,
                };
                log::debug!("[panel] closing {:?}", poi);
                self.begin_close(ticket, &mut out);
            }
            PanelState::Opening {
                poi,
                layout,
                ticket: open_ticket,
            } => {
                out.push(PanelCommand::CancelTimeout {
                    ticket: open_ticket,
                });
                let ticket = self.issue_ticket();
                self.state = PanelState::Closing {
                    poi,
                    layout,
                    ticket,
                    queued: None,
                };
                log::debug!("[panel] closing {:?} mid-open", poi);
                self.begin_close(ticket, &mut out);
            }
        }
        out
    }

    fn begin_close(&mut self, ticket: AnimationTicket, out: &mut PanelCommands) {
        self.sheet_drag = None;
        out.push(PanelCommand::BeginClose { ticket });
        out.push(PanelCommand::ArmTimeout {
            ticket,
            ms: self.cfg.close_timeout_ms,
        });
    }

    pub fn animation_finished(&mut self, ticket: AnimationTicket) -> PanelCommands {
        self.complete(ticket, Completion::TransitionEnd)
    }

    pub fn animation_timed_out(&mut self, ticket: AnimationTicket) -> PanelCommands {
        self.complete(ticket, Completion::Timeout)
    }

    /// Drive the transition owned by `ticket`. Reports for any other ticket
    /// are stale (the race was already decided) and ignored.
    pub fn complete(&mut self, ticket: AnimationTicket, via: Completion) -> PanelCommands {
        let mut out = PanelCommands::new();
        match self.state {
            PanelState::Opening {
                poi,
                layout,
                ticket: live,
            } if live == ticket => {
                if via == Completion::Timeout {
                    log::warn!("[panel] open transition timed out; forcing open");
                }
                out.push(PanelCommand::CancelTimeout { ticket });
                self.state = PanelState::Open { poi, layout };
                log::debug!("[panel] open {:?}", poi);
            }
            PanelState::Closing {
                poi,
                ticket: live,
                queued,
                ..
            } if live == ticket => {
                if via == Completion::Timeout {
                    log::warn!("[panel] close transition timed out; forcing close");
                }
                out.push(PanelCommand::CancelTimeout { ticket });
                out.push(PanelCommand::Unmount);
                self.state = PanelState::Closed;
                log::debug!("[panel] closed {:?}", poi);
                if let Some(next) = queued {
                    out.extend(self.request(next));
                }
            }
            _ => {
                log::debug!("[panel] ignoring stale completion {:?} via {:?}", ticket, via);
            }
        }
        out
    }

    pub fn sheet_drag_start(&mut self, y: f32) {
        if let PanelState::Open {
            layout: PanelLayout::Sheet,
            ..
        } = self.state
        {
            self.sheet_drag = Some(SheetDrag::new(y));
        }
    }

    pub fn sheet_drag_move(&mut self, y: f32) -> PanelCommands {
        let mut out = PanelCommands::new();
        if let Some(drag) = self.sheet_drag.as_mut() {
            out.push(PanelCommand::SetSheetOffset(drag.update(y)));
        }
        out
    }

    /// Past the dismiss threshold the sheet closes; otherwise it springs back.
    pub fn sheet_drag_end(&mut self) -> PanelCommands {
        let Some(drag) = self.sheet_drag.take() else {
            return PanelCommands::new();
        };
        if drag.should_dismiss(self.cfg.sheet_dismiss_px) {
            self.close()
        } else {
            let mut out = PanelCommands::new();
            out.push(PanelCommand::SpringBack);
            out
        }
    }

    pub fn is_sheet_dragging(&self) -> bool {
        self.sheet_drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StarMapConfig;

    fn panel(width: f32) -> InfoPanel {
        InfoPanel::new(StarMapConfig::default().panel, width)
    }

    fn ticket_of(cmds: &PanelCommands) -> AnimationTicket {
        cmds.iter()
            .find_map(|c| match c {
                PanelCommand::ArmTimeout { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn request_from_closed_mounts_after_cleanup() {
        let mut p = panel(1280.0);
        let cmds = p.request(PoiId(0));
        assert_eq!(cmds[0], PanelCommand::RemoveStray);
        assert!(matches!(
            cmds[1],
            PanelCommand::Mount {
                poi: PoiId(0),
                layout: PanelLayout::Floating,
                ..
            }
        ));
        assert!(p.is_animating());
    }

    #[test]
    fn narrow_viewport_uses_sheet() {
        let mut p = panel(390.0);
        p.request(PoiId(1));
        assert_eq!(p.layout(), Some(PanelLayout::Sheet));
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut p = panel(1280.0);
        let t = ticket_of(&p.request(PoiId(0)));
        assert!(!p.animation_finished(t).is_empty());
        assert_eq!(
            p.state(),
            PanelState::Open {
                poi: PoiId(0),
                layout: PanelLayout::Floating
            }
        );
        // the timeout losing the race arrives late
        assert!(p.animation_timed_out(t).is_empty());
        assert_eq!(p.current(), Some(PoiId(0)));
    }

    #[test]
    fn close_on_closing_is_noop() {
        let mut p = panel(1280.0);
        let t = ticket_of(&p.request(PoiId(0)));
        p.animation_finished(t);
        assert!(!p.close().is_empty());
        assert!(p.close().is_empty());
    }

    #[test]
    fn sheet_drag_dismisses_past_threshold() {
        let mut p = panel(390.0);
        let t = ticket_of(&p.request(PoiId(2)));
        p.animation_finished(t);
        p.sheet_drag_start(500.0);
        assert_eq!(
            p.sheet_drag_move(540.0).as_slice(),
            &[PanelCommand::SetSheetOffset(40.0)]
        );
        assert_eq!(p.sheet_drag_end().as_slice(), &[PanelCommand::SpringBack]);
        assert!(matches!(p.state(), PanelState::Open { .. }));

        p.sheet_drag_start(500.0);
        p.sheet_drag_move(700.0);
        let cmds = p.sheet_drag_end();
        assert!(matches!(cmds[0], PanelCommand::BeginClose { .. }));
        assert!(matches!(p.state(), PanelState::Closing { .. }));
    }

    #[test]
    fn floating_panel_ignores_sheet_drag() {
        let mut p = panel(1280.0);
        let t = ticket_of(&p.request(PoiId(0)));
        p.animation_finished(t);
        p.sheet_drag_start(10.0);
        assert!(!p.is_sheet_dragging());
        assert!(p.sheet_drag_end().is_empty());
    }
}
