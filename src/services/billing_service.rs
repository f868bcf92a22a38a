// src/services/billing_service.rs

// Cálculo de cobrança da estadia, usado pelo check-in e pelo checkout.
// Funções puras sobre valores já validados (não-negativos): a validação de
// entrada acontece nos payloads dos handlers, antes de chegar aqui.

use rust_decimal::Decimal;

use crate::models::billing::{BillingAdjustments, BillingResult, CheckinChecklist, StayCharges};

/// Total final da estadia: valor base da reserva mais todas as taxas
/// lançadas pela recepção nesta sessão.
///
/// Nenhum arredondamento é aplicado; os valores seguem a precisão exata
/// do `Decimal`. Garantido `>= charges.base_total_amount` para taxas
/// não-negativas.
pub fn compute_final_total(charges: &StayCharges, adjustments: &BillingAdjustments) -> Decimal {
    charges.base_total_amount
        + adjustments.early_arrival_fee
        + adjustments.late_arrival_fee
        + adjustments.late_departure_fee
        + adjustments.damage_fee
        + adjustments.misc_additional_charges
}

/// Saldo devedor após descontar o adiantamento e o pagamento registrado
/// agora. Pagamento a maior é truncado em zero (não vira crédito).
pub fn compute_remaining_balance(
    final_total: Decimal,
    charges: &StayCharges,
    adjustments: &BillingAdjustments,
) -> Decimal {
    let balance = final_total - charges.advance_paid - adjustments.payment_collected_now;
    balance.max(Decimal::ZERO)
}

/// Conveniência: calcula total e saldo de uma vez.
pub fn evaluate(charges: &StayCharges, adjustments: &BillingAdjustments) -> BillingResult {
    let final_total = compute_final_total(charges, adjustments);
    let remaining_balance = compute_remaining_balance(final_total, charges, adjustments);
    BillingResult { final_total, remaining_balance }
}

/// Portão do check-in: só identidade verificada e confirmação do hóspede
/// bloqueiam a ação. Inspeção do quarto e cartão-chave são coletados na
/// tela mas não participam da decisão. O checkout não tem portão.
pub fn can_finalize(checklist: &CheckinChecklist) -> bool {
    checklist.identity_verified && checklist.guest_confirmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn charges(base: i64, advance: i64) -> StayCharges {
        StayCharges {
            base_total_amount: Decimal::from(base),
            advance_paid: Decimal::from(advance),
            prior_adjustments_total: Decimal::ZERO,
        }
    }

    #[test]
    fn total_sem_taxas_e_saldo_devedor() {
        // Cenário 1: base 15000, adiantamento 5000, sem taxas, sem pagamento.
        let c = charges(15000, 5000);
        let adj = BillingAdjustments::default();

        let result = evaluate(&c, &adj);
        assert_eq!(result.final_total, Decimal::from(15000));
        assert_eq!(result.remaining_balance, Decimal::from(10000));
    }

    #[test]
    fn taxa_de_chegada_tardia_soma_ao_total() {
        // Cenário 2: mesma reserva com taxa de chegada tardia de 2000.
        let c = charges(15000, 5000);
        let adj = BillingAdjustments {
            late_arrival_fee: Decimal::from(2000),
            ..Default::default()
        };

        let result = evaluate(&c, &adj);
        assert_eq!(result.final_total, Decimal::from(17000));
        assert_eq!(result.remaining_balance, Decimal::from(12000));
    }

    #[test]
    fn pagamento_exato_zera_o_saldo() {
        // Cenário 3: pagamento de 12000 quita o saldo.
        let c = charges(15000, 5000);
        let adj = BillingAdjustments {
            late_arrival_fee: Decimal::from(2000),
            payment_collected_now: Decimal::from(12000),
            ..Default::default()
        };

        assert_eq!(evaluate(&c, &adj).remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn pagamento_a_maior_e_truncado_em_zero() {
        // Cenário 4: pagamento de 20000 não gera saldo negativo nem crédito.
        let c = charges(15000, 5000);
        let adj = BillingAdjustments {
            late_arrival_fee: Decimal::from(2000),
            payment_collected_now: Decimal::from(20000),
            ..Default::default()
        };

        assert_eq!(evaluate(&c, &adj).remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn total_final_nunca_fica_abaixo_do_valor_base() {
        let c = charges(9_999, 0);
        let combos = [
            BillingAdjustments::default(),
            BillingAdjustments { damage_fee: Decimal::from(1), ..Default::default() },
            BillingAdjustments {
                early_arrival_fee: Decimal::new(1250, 2), // 12.50
                misc_additional_charges: Decimal::new(3375, 2),
                ..Default::default()
            },
        ];

        for adj in combos {
            assert!(compute_final_total(&c, &adj) >= c.base_total_amount);
        }
    }

    #[test]
    fn cada_taxa_incrementa_o_total_exatamente_pelo_seu_valor() {
        let c = charges(15000, 0);
        let base_adj = BillingAdjustments::default();
        let base_total = compute_final_total(&c, &base_adj);

        let increment = Decimal::new(750, 2); // 7.50

        let variants: [fn(Decimal) -> BillingAdjustments; 5] = [
            |v| BillingAdjustments { early_arrival_fee: v, ..Default::default() },
            |v| BillingAdjustments { late_arrival_fee: v, ..Default::default() },
            |v| BillingAdjustments { late_departure_fee: v, ..Default::default() },
            |v| BillingAdjustments { damage_fee: v, ..Default::default() },
            |v| BillingAdjustments { misc_additional_charges: v, ..Default::default() },
        ];

        for build in variants {
            let adj = build(increment);
            assert_eq!(compute_final_total(&c, &adj), base_total + increment);
        }
    }

    #[test]
    fn pagamento_reduz_o_saldo_na_mesma_medida_ate_zerar() {
        let c = charges(10000, 0);
        let mut adj = BillingAdjustments::default();
        let total = compute_final_total(&c, &adj);

        // Enquanto há saldo, cada unidade paga reduz o saldo em exatamente 1.
        adj.payment_collected_now = Decimal::from(4000);
        let before = compute_remaining_balance(total, &c, &adj);
        adj.payment_collected_now = Decimal::from(4001);
        let after = compute_remaining_balance(total, &c, &adj);
        assert_eq!(before - after, Decimal::ONE);

        // Depois de zerar, pagar mais não tem efeito.
        adj.payment_collected_now = Decimal::from(10000);
        assert_eq!(compute_remaining_balance(total, &c, &adj), Decimal::ZERO);
        adj.payment_collected_now = Decimal::from(99999);
        assert_eq!(compute_remaining_balance(total, &c, &adj), Decimal::ZERO);
    }

    #[test]
    fn calculo_e_deterministico() {
        let c = charges(12345, 678);
        let adj = BillingAdjustments {
            damage_fee: Decimal::new(4299, 2),
            payment_collected_now: Decimal::from(500),
            ..Default::default()
        };

        assert_eq!(evaluate(&c, &adj), evaluate(&c, &adj));
    }

    #[test]
    fn checklist_exige_identidade_e_confirmacao() {
        // Cenário 5: identidade verificada mas hóspede não confirmou.
        let parcial = CheckinChecklist {
            identity_verified: true,
            guest_confirmed: false,
            ..Default::default()
        };
        assert!(!can_finalize(&parcial));

        let invertido = CheckinChecklist {
            identity_verified: false,
            guest_confirmed: true,
            ..Default::default()
        };
        assert!(!can_finalize(&invertido));

        assert!(!can_finalize(&CheckinChecklist::default()));
    }

    #[test]
    fn inspecao_e_cartao_nao_bloqueiam_o_check_in() {
        // Cenário 6: quarto não inspecionado e cartão não emitido não impedem.
        let checklist = CheckinChecklist {
            identity_verified: true,
            guest_confirmed: true,
            room_inspected: false,
            key_card_issued: false,
        };
        assert!(can_finalize(&checklist));
    }
}
