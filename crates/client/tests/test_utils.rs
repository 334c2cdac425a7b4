#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use clinica_core::models::{Address, Doctor, EntityId, Patient};

pub fn address() -> Address {
    Address {
        logradouro: "Rua das Flores".to_string(),
        numero: "100".to_string(),
        complemento: String::new(),
        bairro: "Centro".to_string(),
        cidade: "Campinas".to_string(),
        uf: "SP".to_string(),
        cep: "13010000".to_string(),
    }
}

pub fn patient(id: &str, nome: &str) -> Patient {
    Patient {
        id: EntityId::from(id),
        nome: nome.to_string(),
        cpf: "12345678900".to_string(),
        email: format!("{}@example.com", id.to_lowercase()),
        telefone: "11999990000".to_string(),
        endereco: Some(address()),
    }
}

pub fn doctor(id: &str, nome: &str, especialidade: &str) -> Doctor {
    Doctor {
        id: EntityId::from(id),
        nome: nome.to_string(),
        especialidade: especialidade.to_string(),
        crm: "123456".to_string(),
        email: format!("{}@example.com", id.to_lowercase()),
        telefone: "19988887777".to_string(),
        endereco: Some(address()),
    }
}

/// Fixed "current time" used by scheduling tests.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 4, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}
