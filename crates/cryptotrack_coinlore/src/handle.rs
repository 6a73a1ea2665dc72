use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::{JoinError, JoinHandle};

use crate::error::{CoinloreError, Result};

/// Abort handle for a query running on the tokio runtime.
///
/// Awaiting the handle yields the query's result. Calling [`abort`](Self::abort)
/// or dropping the handle before completion cancels the in-flight request.
#[must_use = "dropping a RequestHandle aborts its request"]
#[derive(Debug)]
pub struct RequestHandle<T> {
    task: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> RequestHandle<T> {
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            task: tokio::spawn(future),
        }
    }
}

impl<T> RequestHandle<T> {
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Future for RequestHandle<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(err) => Err(join_error(err)),
        })
    }
}

impl<T> Drop for RequestHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn join_error(err: JoinError) -> CoinloreError {
    if err.is_cancelled() {
        CoinloreError::Cancelled
    } else {
        CoinloreError::Task(err.to_string())
    }
}
