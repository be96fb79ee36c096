use std::cell::RefCell;

use clone_core::ApiError;

use crate::contracts::CloneReceipt;
use crate::contracts::CloneRejected;
use crate::contracts::CloneRequest;

/// Performs the clone against the API. Retries, auth and rate limiting are
/// the implementation's business.
pub trait CloneClient {
    fn perform_clone(&self, request: &CloneRequest) -> Result<CloneReceipt, CloneRejected>;
}

/// Answers every request locally. Succeeds unless built with
/// [`SimulatedCloneClient::rejecting`]; records what it was asked to do.
#[derive(Debug, Default)]
pub struct SimulatedCloneClient {
    rejection: Option<Vec<ApiError>>,
    requests: RefCell<Vec<CloneRequest>>,
}

impl SimulatedCloneClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(errors: Vec<ApiError>) -> Self {
        Self {
            rejection: Some(errors),
            ..Self::new()
        }
    }

    pub fn requests(&self) -> Vec<CloneRequest> {
        self.requests.borrow().clone()
    }
}

impl CloneClient for SimulatedCloneClient {
    fn perform_clone(&self, request: &CloneRequest) -> Result<CloneReceipt, CloneRejected> {
        let mut requests = self.requests.borrow_mut();
        requests.push(request.clone());
        if let Some(errors) = &self.rejection {
            return Err(CloneRejected(errors.clone()));
        }

        Ok(match request {
            CloneRequest::DuplicateDisk { disk_id, .. } => CloneReceipt::DiskCreated {
                disk_id: disk_id.saturating_add(requests.len() as u64),
            },
            CloneRequest::CloneLinode {
                destination_linode_id,
                ..
            } => CloneReceipt::LinodeUpdated {
                linode_id: *destination_linode_id,
            },
        })
    }
}
