// src/services/receipt_service.rs

use genpdf::{elements, style, Element};
use image::Luma;
use qrcode::QrCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{GuestRepository, ReservationRepository, RoomRepository, SettingsRepository},
};

#[derive(Clone)]
pub struct ReceiptService {
    reservation_repo: ReservationRepository,
    room_repo: RoomRepository,
    guest_repo: GuestRepository,
    settings_repo: SettingsRepository,
}

impl ReceiptService {
    pub fn new(
        reservation_repo: ReservationRepository,
        room_repo: RoomRepository,
        guest_repo: GuestRepository,
        settings_repo: SettingsRepository,
    ) -> Self {
        Self { reservation_repo, room_repo, guest_repo, settings_repo }
    }

    // Gera o recibo da estadia (conta do hóspede) em PDF, em memória.
    pub async fn generate_stay_receipt(&self, reservation_id: Uuid) -> Result<Vec<u8>, AppError> {
        // 1. Busca os Dados
        let reservation = self
            .reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or(AppError::ReservationNotFound)?;

        // O recibo só existe depois que a transação gravou os valores finais.
        let (final_total, remaining_balance) =
            match (reservation.final_total, reservation.remaining_balance) {
                (Some(total), Some(balance)) => (total, balance),
                _ => {
                    return Err(AppError::IneligibleReservationState(
                        "O recibo só fica disponível após o check-in ou checkout.".into(),
                    ))
                }
            };

        let room = self
            .room_repo
            .find_by_id(reservation.room_id)
            .await?
            .ok_or(AppError::RoomNotFound)?;

        let guest = self
            .guest_repo
            .find_by_id(reservation.guest_id)
            .await?
            .ok_or(AppError::GuestNotFound)?;

        let settings = self.settings_repo.get_settings().await?;

        // 2. Configura o PDF
        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string()))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("Recibo de estadia - Quarto {}", room.room_number));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        let title_text = settings.hotel_name.unwrap_or("HOTEL".to_string());
        doc.push(elements::Paragraph::new(title_text)
            .styled(style::Style::new().bold().with_font_size(18)));

        if let Some(doc_num) = settings.document_number {
            doc.push(elements::Paragraph::new(format!("CNPJ/CPF: {}", doc_num))
                .styled(style::Style::new().with_font_size(10)));
        }

        doc.push(elements::Break::new(1.5));

        doc.push(elements::Paragraph::new(format!("RECIBO DE ESTADIA - QUARTO {}", room.room_number))
            .styled(style::Style::new().bold().with_font_size(14)));

        doc.push(elements::Paragraph::new(format!("Hóspede: {}", guest.full_name)));
        doc.push(elements::Paragraph::new(format!(
            "Período: {} a {}",
            reservation.check_in_date.format("%d/%m/%Y"),
            reservation.check_out_date.format("%d/%m/%Y")
        )));

        doc.push(elements::Break::new(2));

        // --- TABELA DE VALORES ---
        // Pesos das colunas: Descrição (4), Valor (2)
        let mut table = elements::TableLayout::new(vec![4, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table.row()
            .element(elements::Paragraph::new("Descrição").styled(style_bold))
            .element(elements::Paragraph::new("Valor").styled(style_bold))
            .push()
            .expect("Table error");

        let session_fees = final_total - reservation.base_total_amount;
        let rows: Vec<(&str, Decimal)> = vec![
            ("Diárias e serviços", reservation.base_total_amount),
            ("Taxas da sessão (chegada/saída, danos, extras)", session_fees),
            ("Adiantamento recebido", reservation.advance_paid),
        ];

        for (label, amount) in rows {
            table.row()
                .element(elements::Paragraph::new(label))
                .element(elements::Paragraph::new(format!("R$ {:.2}", amount)))
                .push()
                .expect("Table row error");
        }

        doc.push(table);
        doc.push(elements::Break::new(2));

        // --- TOTAIS ---
        let mut total_paragraph =
            elements::Paragraph::new(format!("TOTAL DA ESTADIA: R$ {:.2}", final_total));
        total_paragraph.set_alignment(genpdf::Alignment::Right);
        doc.push(total_paragraph.styled(style::Style::new().bold().with_font_size(12)));

        let mut balance_paragraph =
            elements::Paragraph::new(format!("SALDO DEVEDOR: R$ {:.2}", remaining_balance));
        balance_paragraph.set_alignment(genpdf::Alignment::Right);
        doc.push(balance_paragraph.styled(style::Style::new().bold().with_font_size(12)));

        doc.push(elements::Break::new(2));

        // --- ÁREA DE PAGAMENTO (QR CODE) ---
        // Só faz sentido quando ainda há saldo a receber.
        if remaining_balance > Decimal::ZERO {
            if let Some(key) = settings.payment_key {
                doc.push(elements::Paragraph::new("PAGAMENTO DO SALDO VIA PIX")
                    .styled(style::Style::new().bold().with_font_size(12)));

                doc.push(elements::Paragraph::new(format!("Chave: {}", key)));
                doc.push(elements::Break::new(1));

                let code = QrCode::new(key.as_bytes())
                    .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

                let image_buffer = code.render::<Luma<u8>>().build();
                let dynamic_image = image::DynamicImage::ImageLuma8(image_buffer);

                let pdf_image = genpdf::elements::Image::from_dynamic_image(dynamic_image)
                    .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?
                    .with_scale(genpdf::Scale::new(0.5, 0.5));

                doc.push(pdf_image);
            }
        }

        // --- RODAPÉ ---
        if let Some(addr) = settings.address {
            doc.push(elements::Break::new(2));
            doc.push(elements::Paragraph::new(addr).styled(style::Style::new().italic().with_font_size(8)));
        }

        // 3. Renderiza para Buffer (Memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        Ok(buffer)
    }
}
