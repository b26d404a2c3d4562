use crate::domain::model::Snapshot;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 外部資料來源：每次呼叫都產生一份完整的新快照，失敗時不回傳部分結果
#[async_trait]
pub trait PatientSource: Send + Sync {
    async fn load(&self) -> Result<Snapshot>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn data_path(&self) -> &str;
    fn model_path(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;
}
