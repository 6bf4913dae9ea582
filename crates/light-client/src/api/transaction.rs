use crate::{
    ApiClient, ApiError, ApiRequest, TransactionCountData, TransactionData,
    TransactionListCountParams, TransactionListParams,
};

impl ApiClient {
    /// List indexed transactions.
    pub async fn get_transactions(
        &self,
        params: &TransactionListParams,
    ) -> Result<Vec<TransactionData>, ApiError> {
        let request = ApiRequest::get("/transaction/list").query(params)?;
        self.send(request).await
    }

    /// Count indexed transactions.
    pub async fn get_transactions_count(
        &self,
        params: &TransactionListCountParams,
    ) -> Result<TransactionCountData, ApiError> {
        let request = ApiRequest::get("/transaction/list/count").query(params)?;
        self.send(request).await
    }
}
