//! Payment composition service.

use futures::future::join_all;

use crate::api::dto::{PaymentReplaceRequest, PaymentRequest, PaymentResponse};
use crate::config::PeersConfig;
use crate::error::{AppError, AppResult};
use crate::models::Payment;
use crate::remote::{view_or_absent, OrderView, RemoteClient};
use crate::repositories::PaymentRepository;

/// Service composing payments with a view of their order.
#[derive(Clone)]
pub struct PaymentService {
    repo: PaymentRepository,
    remote: RemoteClient,
    peers: PeersConfig,
}

impl PaymentService {
    pub fn new(repo: PaymentRepository, remote: RemoteClient, peers: PeersConfig) -> Self {
        Self {
            repo,
            remote,
            peers,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<PaymentResponse>> {
        let payments = self.repo.list_all().await?;
        Ok(join_all(payments.into_iter().map(|payment| self.compose(payment))).await)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<PaymentResponse> {
        let payment = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("payment", "id", id))?;
        Ok(self.compose(payment).await)
    }

    /// Persists the payment first; the order view on the response is
    /// best-effort.
    pub async fn save(&self, request: PaymentRequest) -> AppResult<PaymentResponse> {
        let saved = self.repo.create(request.into_new_payment()).await?;
        Ok(self.compose(saved).await)
    }

    /// Full replacement addressed by the identifier inside the payload.
    pub async fn update(&self, request: PaymentReplaceRequest) -> AppResult<PaymentResponse> {
        let id = request.payment_id;
        let updated = self.repo.update(id, request.into_update_payment()).await?;
        Ok(self.compose(updated).await)
    }

    /// Deletes by identifier. Deleting an absent payment is not an error.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        Ok(())
    }

    async fn compose(&self, payment: Payment) -> PaymentResponse {
        let order = self
            .remote
            .fetch_one::<OrderView>(&self.peers.orders_endpoint(), payment.order_id)
            .await;
        PaymentResponse::compose(payment, view_or_absent("order", order))
    }
}
