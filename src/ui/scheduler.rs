//! Acciones diferidas (cerrar un modal tras un éxito, redirigir al login)
//!
//! Cada acción corre en una tarea de tokio que duerme el retardo y manda el
//! comando por un canal; la página lo aplica en `settle()`. Programar otra
//! acción cancela la anterior y al destruir la página se abortan las
//! pendientes.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Scheduler<C> {
    tx: mpsc::UnboundedSender<C>,
    rx: mpsc::UnboundedReceiver<C>,
    pending: Option<JoinHandle<()>>,
}

impl<C: Send + 'static> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Send + 'static> Scheduler<C> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx, pending: None }
    }

    /// Programar `command` dentro de `delay`, reemplazando la acción pendiente
    pub fn schedule(&mut self, delay: Duration, command: C) {
        self.cancel();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // el receptor vive tanto como el scheduler
            let _ = tx.send(command);
        }));
    }

    /// Cancelar la acción pendiente (y descartar la que ya disparó sin aplicarse)
    pub fn cancel(&mut self) -> bool {
        let mut cancelled = false;
        if let Some(handle) = self.pending.take() {
            cancelled = !handle.is_finished();
            handle.abort();
        }
        while self.rx.try_recv().is_ok() {
            cancelled = true;
        }
        if cancelled {
            tracing::debug!("⏹️ Acción diferida cancelada");
        }
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Comando ya disparado, sin esperar
    pub fn try_fired(&mut self) -> Option<C> {
        let command = self.rx.try_recv().ok()?;
        self.pending = None;
        Some(command)
    }

    /// Esperar a que dispare la acción pendiente; `None` si no hay ninguna
    pub async fn wait(&mut self) -> Option<C> {
        if let Some(command) = self.try_fired() {
            return Some(command);
        }
        let handle = self.pending.take()?;
        if handle.await.is_err() {
            return None;
        }
        self.rx.try_recv().ok()
    }
}

impl<C> Drop for Scheduler<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
