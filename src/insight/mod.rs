//! Generative financial review
//!
//! Sends a summary of recent transactions to the Gemini API and parses a
//! structured review out of the response. Every failure path, from a
//! missing API key to an unparseable body, degrades to a canned review so
//! the command never errors out.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Transaction;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Overall health verdict attached to a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "Estável")]
    Stable,
    #[serde(rename = "Atenção")]
    Attention,
    #[serde(rename = "Crítico")]
    Critical,
}

impl HealthStatus {
    /// Label as shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Stable => "Estável",
            HealthStatus::Attention => "Atenção",
            HealthStatus::Critical => "Crítico",
        }
    }
}

/// A structured review of the user's finances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReview {
    pub summary: String,
    pub tips: Vec<String>,
    pub status: HealthStatus,
}

impl FinancialReview {
    /// Canned review used whenever the API cannot be reached or parsed
    pub fn fallback() -> Self {
        Self {
            summary: "Identificamos uma oscilação no processamento da análise. Baseado no seu \
                      volume de gastos, recomendamos revisar as categorias de Lazer e Alimentação."
                .to_string(),
            tips: vec![
                "Mantenha a regra dos 50-30-20 (Essencial, Lazer, Investimento).".to_string(),
                "Utilize a projeção de saldo para evitar surpresas no fim do mês.".to_string(),
                "Revise assinaturas de streaming que você não utiliza há mais de 30 dias."
                    .to_string(),
            ],
            status: HealthStatus::Attention,
        }
    }
}

/// Canned answer for the free-form question path
pub fn ask_fallback() -> String {
    "Desculpe, não consegui processar sua dúvida agora. Tente perguntar sobre reserva de \
     emergência ou juros compostos!"
        .to_string()
}

/// One prompt line per transaction
pub fn transaction_context(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|txn| {
            format!(
                "- {}: {} | R$ {} ({} - {})",
                txn.date,
                txn.description,
                txn.amount.to_plain_string(),
                txn.category.label(),
                txn.kind,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the review prompt: consultant persona, transactions, requirements
pub fn build_prompt(transactions: &[Transaction]) -> String {
    format!(
        "Você é um consultor financeiro sênior especializado em economia doméstica \
         brasileira.\nAnalise as seguintes transações e forneça um diagnóstico \
         preciso:\n\n{}\n\nRequisitos:\n\
         1. Identifique o maior ralo financeiro.\n\
         2. Dê 3 dicas acionáveis para economizar este mês.\n\
         3. Seja direto, motivador e profissional.",
        transaction_context(transactions)
    )
}

/// Render the free-form question prompt
pub fn build_ask_prompt(question: &str, context: &str) -> String {
    format!(
        "Contexto do usuário: {}\n\nPergunta: {}\n\nResponda como um assistente \
         financeiro amigável em até 3 frases.",
        context, question
    )
}

/// Extract a review from a Gemini generateContent response body
pub fn parse_review(body: &str) -> Option<FinancialReview> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    let text = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;
    serde_json::from_str(text).ok()
}

fn extract_text(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

/// Client for the generative review endpoint
pub struct InsightClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
}

impl InsightClient {
    /// Build a client reading the API key from the environment
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into(),
            api_key: std::env::var(API_KEY_ENV).ok(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, MODEL
        )
    }

    fn call(&self, body: &serde_json::Value) -> Option<String> {
        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => {
                warn!("no {} set, using canned review", API_KEY_ENV);
                return None;
            }
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key.as_str())])
            .json(body)
            .send();

        match response {
            Ok(resp) if resp.status().is_success() => resp.text().ok(),
            Ok(resp) => {
                warn!(status = %resp.status(), "review request rejected");
                None
            }
            Err(err) => {
                warn!(error = %err, "review request failed");
                None
            }
        }
    }

    /// Generate a structured review, falling back to the canned one
    pub fn review(&self, transactions: &[Transaction]) -> FinancialReview {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": build_prompt(transactions) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "summary": { "type": "STRING" },
                        "tips": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "status": {
                            "type": "STRING",
                            "enum": ["Estável", "Atenção", "Crítico"]
                        }
                    },
                    "required": ["summary", "tips", "status"]
                }
            }
        });

        self.call(&body)
            .and_then(|text| parse_review(&text))
            .unwrap_or_else(FinancialReview::fallback)
    }

    /// Answer a free-form question, falling back to the canned answer
    pub fn ask(&self, question: &str, context: &str) -> String {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": build_ask_prompt(question, context) }]
            }]
        });

        self.call(&body)
            .and_then(|text| extract_text(&text))
            .unwrap_or_else(ask_fallback)
    }
}

impl Default for InsightClient {
    fn default() -> Self {
        Self::new()
    }
}
