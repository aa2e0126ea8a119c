//! Builds the pre-filled WhatsApp link behind the appointment form.
//!
//! Nothing here talks to the browser; the form component collects a
//! [`ContactIntent`] on submit, turns it into a link and opens it.

use crate::config;

const ATTACHMENT_NOTE: &str =
    "\n\n📷 *Tenho uma foto de referência para enviar!* (Vou anexar aqui na conversa)";

/// Services offered in the form's select list, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceType {
    #[default]
    VetConsultation,
    BathAndGrooming,
    Vaccination,
    ProductPurchase,
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::VetConsultation,
        ServiceType::BathAndGrooming,
        ServiceType::Vaccination,
        ServiceType::ProductPurchase,
        ServiceType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::VetConsultation => "Consulta Veterinária",
            ServiceType::BathAndGrooming => "Banho e Tosa",
            ServiceType::Vaccination => "Vacinação",
            ServiceType::ProductPurchase => "Compra de Produtos",
            ServiceType::Other => "Outros",
        }
    }

    pub fn from_label(label: &str) -> Option<ServiceType> {
        Self::ALL.into_iter().find(|service| service.label() == label)
    }
}

/// Snapshot of the form at submit time. Never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactIntent {
    pub sender_name: String,
    pub pet_name: String,
    pub service_type: ServiceType,
    pub free_text_message: String,
    pub has_attachment_hint: bool,
}

impl ContactIntent {
    pub fn message(&self) -> String {
        let mut message = format!(
            "Olá Pet Green! 🐾\n\nMe chamo *{}* e gostaria de agendar um serviço para meu pet *{}*.\n\n🩺 Serviço: {}\n💬 Mensagem: {}",
            self.sender_name,
            self.pet_name,
            self.service_type.label(),
            self.free_text_message,
        );

        // wa.me can't carry files, so we only tell the clinic a photo is coming
        if self.has_attachment_hint {
            message.push_str(ATTACHMENT_NOTE);
        }

        message
    }

    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(config::WHATSAPP_NUMBER, &self.message())
    }
}

pub fn whatsapp_link(recipient: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        recipient,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_text(link: &str) -> String {
        let (_, query) = link.split_once("?text=").expect("link has a text query");
        urlencoding::decode(query).expect("valid utf-8").into_owned()
    }

    fn ana_and_rex() -> ContactIntent {
        ContactIntent {
            sender_name: "Ana".to_string(),
            pet_name: "Rex".to_string(),
            service_type: ServiceType::BathAndGrooming,
            free_text_message: "sábado de manhã".to_string(),
            has_attachment_hint: false,
        }
    }

    #[test]
    fn fills_template_in_order() {
        let link = ana_and_rex().whatsapp_link();

        assert!(link.starts_with(&format!("https://wa.me/{}?text=", config::WHATSAPP_NUMBER)));
        assert_eq!(
            decoded_text(&link),
            "Olá Pet Green! 🐾\n\nMe chamo *Ana* e gostaria de agendar um serviço para meu pet *Rex*.\n\n🩺 Serviço: Banho e Tosa\n💬 Mensagem: sábado de manhã"
        );
    }

    #[test]
    fn attachment_note_appended_once() {
        let intent = ContactIntent {
            has_attachment_hint: true,
            ..ana_and_rex()
        };

        let text = decoded_text(&intent.whatsapp_link());
        assert!(text.ends_with(ATTACHMENT_NOTE));
        assert_eq!(text.matches("Tenho uma foto de referência").count(), 1);
        assert_eq!(text, format!("{}{}", ana_and_rex().message(), ATTACHMENT_NOTE));
    }

    #[test]
    fn no_attachment_note_without_hint() {
        assert!(!ana_and_rex().message().contains("📷"));
    }

    #[test]
    fn query_is_fully_encoded() {
        let link = whatsapp_link("5584000000000", "a b&c=d\n#é");
        let (_, query) = link.split_once("?text=").unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
        assert!(!query.contains('\n'));
        assert_eq!(decoded_text(&link), "a b&c=d\n#é");
    }

    #[test]
    fn empty_free_text_still_renders_label() {
        let intent = ContactIntent {
            sender_name: "Ana".to_string(),
            pet_name: "Mel".to_string(),
            ..ContactIntent::default()
        };

        assert!(intent
            .message()
            .ends_with("🩺 Serviço: Consulta Veterinária\n💬 Mensagem: "));
    }

    #[test]
    fn service_options_keep_select_order() {
        let labels: Vec<_> = ServiceType::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            [
                "Consulta Veterinária",
                "Banho e Tosa",
                "Vacinação",
                "Compra de Produtos",
                "Outros"
            ]
        );
        assert_eq!(ServiceType::default(), ServiceType::VetConsultation);
    }

    #[test]
    fn service_label_lookup() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_label(service.label()), Some(service));
        }
        assert_eq!(ServiceType::from_label("Hospedagem"), None);
    }
}
