use tokio::sync::watch;

/// creates a resolve-once readiness gate.
///
/// replaces the pattern of every interested component polling an external
/// capability (the location-autocomplete provider) on a short interval:
/// whoever loads the capability resolves the notifier exactly once, and any
/// number of consumers await the signal.
pub fn readiness() -> (ReadinessNotifier, Readiness) {
    let (tx, rx) = watch::channel(false);
    (ReadinessNotifier { tx }, Readiness { rx })
}

/// the resolving half of the gate. consumed by [`ReadinessNotifier::notify`]
/// so the signal can only be resolved once.
pub struct ReadinessNotifier {
    tx: watch::Sender<bool>,
}

impl ReadinessNotifier {
    /// marks the capability ready, waking all waiting consumers.
    pub fn notify(self) {
        // receivers may have all been dropped; that is not an error here
        let _ = self.tx.send(true);
    }
}

/// the consuming half of the gate. cheap to clone, one per interested
/// component.
#[derive(Clone)]
pub struct Readiness {
    rx: watch::Receiver<bool>,
}

impl Readiness {
    /// synchronous probe, for callers that only want to branch on readiness.
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// completes once the capability is ready. returns immediately if the
    /// notifier already resolved, including when it resolved and was dropped
    /// before this call.
    pub async fn wait(&mut self) {
        if *self.rx.borrow() {
            return;
        }
        // a closed channel with a final value of true still counts as ready
        while self.rx.changed().await.is_ok() {
            if *self.rx.borrow() {
                return;
            }
        }
    }
}
