use std::time::{Duration, Instant};

use egui::{Align2, Color32, RichText};

const DEFAULT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn symbol(&self) -> &str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✘",
        }
    }

    fn color(&self) -> Color32 {
        match self {
            ToastKind::Success => Color32::from_rgb(74, 222, 128),
            ToastKind::Error => Color32::from_rgb(248, 113, 113),
        }
    }
}

#[derive(Debug)]
struct Toast {
    kind: ToastKind,
    message: String,
    created: Instant,
}

/// Transient notification queue owned by the app, drawn top-right.
///
/// Toasts auto-dismiss after a TTL and can be dismissed manually. This is
/// explicit state passed to whoever needs to publish, not a global
/// listener set.
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { toasts: vec![], ttl }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        self.toasts.push(Toast {
            kind,
            message,
            created: Instant::now(),
        });
    }

    /// Drops toasts older than the TTL.
    pub fn prune(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| toast.created.elapsed() < ttl);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune();
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed: Option<usize> = None;

        egui::Area::new("toasts".into())
            .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
            .show(ctx, |ui| {
                for (index, toast) in self.toasts.iter().enumerate() {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(toast.kind.symbol())
                                    .color(toast.kind.color())
                                    .size(16.0),
                            );
                            ui.label(&toast.message);
                            if ui.small_button("✖").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        if let Some(index) = dismissed {
            self.toasts.remove(index);
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_prune_within_ttl() {
        let mut queue = ToastQueue::with_ttl(Duration::from_secs(60));
        queue.success("Loaded 50 flights.");
        queue.error("Failed to load flight data.");
        assert_eq!(queue.toasts.len(), 2);

        queue.prune();
        assert_eq!(queue.toasts.len(), 2);
    }

    #[test]
    fn test_push_records_the_kind() {
        let mut queue = ToastQueue::new();
        queue.success("Loaded 50 flights.");
        queue.error("Failed to load flight data.");

        assert_eq!(queue.toasts[0].kind, ToastKind::Success);
        assert_eq!(queue.toasts[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_prune_drops_expired_toasts() {
        let mut queue = ToastQueue::with_ttl(Duration::ZERO);
        queue.success("done");
        queue.prune();
        assert!(queue.toasts.is_empty());
    }
}
