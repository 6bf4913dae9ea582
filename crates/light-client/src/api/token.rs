use crate::{
    ApiClient, ApiError, ApiRequest, TokenCountData, TokenDataPage, TokenListCountParams,
    TokenListParams,
};

impl ApiClient {
    /// List token balances.
    pub async fn get_tokens(&self, params: &TokenListParams) -> Result<TokenDataPage, ApiError> {
        let request = ApiRequest::get("/token/list").query(params)?;
        self.send(request).await
    }

    /// Count token balances.
    pub async fn get_tokens_count(
        &self,
        params: &TokenListCountParams,
    ) -> Result<TokenCountData, ApiError> {
        let request = ApiRequest::get("/token/list/count").query(params)?;
        self.send(request).await
    }
}
