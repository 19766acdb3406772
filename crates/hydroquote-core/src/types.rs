//! Core data types shared by the enrichment layer and the CLI.

use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which field of a quotation an enrichment call is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentKind {
    /// The free-text "Observações" section
    Notes,
    /// A single line-item description
    Description,
}

impl EnrichmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for EnrichmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a budget line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Material,
    Labor,
}

impl ItemCategory {
    /// Human label used in prompts and printed quotations.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Material => "Material",
            Self::Labor => "Mão de Obra / Serviço",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Labor => "labor",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "material" => Ok(Self::Material),
            "labor" | "service" | "servico" | "serviço" => Ok(Self::Labor),
            other => Err(format!(
                "unknown item category '{other}' (expected 'material' or 'labor')"
            )),
        }
    }
}

/// Company and signatory data printed in the header and footer of quotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyData {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,

    // === Signatory ===
    pub signatory_name: String,
    pub mobile: String,
    pub secondary_email: String,

    /// Inline `data:` URL of the company logo, empty when none was uploaded
    pub logo_url: String,
}

/// Editable text fields of [`CompanyData`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
    Address,
    Phone,
    Email,
    SignatoryName,
    Mobile,
    SecondaryEmail,
}

impl CompanyField {
    pub const ALL: [CompanyField; 7] = [
        Self::Name,
        Self::Address,
        Self::Phone,
        Self::Email,
        Self::SignatoryName,
        Self::Mobile,
        Self::SecondaryEmail,
    ];

    /// TOML key under `[company]`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::SignatoryName => "signatory_name",
            Self::Mobile => "mobile",
            Self::SecondaryEmail => "secondary_email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome da Empresa",
            Self::Address => "Endereço Completo",
            Self::Phone => "Telefone Geral",
            Self::Email => "Email Geral / Vendas",
            Self::SignatoryName => "Nome do Responsável",
            Self::Mobile => "Celular / Telefone Direto",
            Self::SecondaryEmail => "Email Pessoal / Direto",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Ex: HidroSoluções Engenharia",
            Self::Address => "Rua Exemplo, 123 - Bairro - Cidade/UF",
            Self::Phone => "(00) 00000-0000",
            Self::Email => "vendas@suaempresa.com",
            Self::SignatoryName => "Ex: Eng Vicenzo Agustini",
            Self::Mobile => "+ 55 (47) ...",
            Self::SecondaryEmail => "nome@empresa.com.br",
        }
    }
}

impl CompanyData {
    pub fn get(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::Name => &self.name,
            CompanyField::Address => &self.address,
            CompanyField::Phone => &self.phone,
            CompanyField::Email => &self.email,
            CompanyField::SignatoryName => &self.signatory_name,
            CompanyField::Mobile => &self.mobile,
            CompanyField::SecondaryEmail => &self.secondary_email,
        }
    }

    /// Return a copy with one field replaced; the original record is untouched.
    pub fn with_field(&self, field: CompanyField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        let value = value.into();
        match field {
            CompanyField::Name => updated.name = value,
            CompanyField::Address => updated.address = value,
            CompanyField::Phone => updated.phone = value,
            CompanyField::Email => updated.email = value,
            CompanyField::SignatoryName => updated.signatory_name = value,
            CompanyField::Mobile => updated.mobile = value,
            CompanyField::SecondaryEmail => updated.secondary_email = value,
        }
        updated
    }

    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty()
    }
}

/// An uploaded logo held as inline base64 data.
#[derive(Debug, Clone)]
pub struct LogoImage {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/png")
    pub media_type: String,
}

impl LogoImage {
    /// Create a `LogoImage` from raw bytes and a format or file extension.
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format.to_lowercase().as_str() {
            "png" => "image/png",
            "jpeg" | "jpg" => "image/jpeg",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "svg" => "image/svg+xml",
            other => {
                tracing::warn!("Unknown logo format '{other}', defaulting to image/png");
                "image/png"
            }
        };

        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Read a logo from disk, taking the format from the file extension.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let bytes = std::fs::read(path)?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Ok(Self::from_bytes(&bytes, format))
    }

    /// Return the `data:` URL stored in [`CompanyData::logo_url`].
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}
