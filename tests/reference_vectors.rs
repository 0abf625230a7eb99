//! End-to-end checks against signatures produced by the exchange's own
//! reference programs for the same key, order and contract.

use firefly_signer::{
    domain_separator, eip712_digest, hash_cancellation, hash_order, pack_flags,
    personal_message_digest, recover_address, sign, sign_typed_data, keccak256, DomainConfig,
    Network, Order, OrderSigner, PrivateKey,
};

const KEY: &str = "2ee813034aab842141cb85d477f7d0e359838f46fcab34a935c69410a4d39efb";
const MAKER: &str = "0x6F03F28bC1eBB7C9B45614bF2483E70F008A6D3D";
const CONTRACT: &str = "0x934Dd6503795ef6EE6a36e3b3f1d7Be6c7096955";

const ORDER_HASH: &str = "400fbdbc69662f7bf23c57799ea6b5ff6c6c7e2742a46eccbf83b3366595bf43";
const ORDER_SIGNATURE: &str = "2e2dbad4610bc052a81eb6b7791882ece65b7137190877cf7f9e958444d70574\
                               20eaef3fc56749c6863a55f65b7a5b27278708ad96d89fb695c4fd1998d994401b01";
const CANCEL_HASH: &str = "9d0ddff50c467ca2d84458369e8cbfcbfa1121432eb22245ed432aaa91738f79";
const CANCEL_SIGNATURE: &str = "f897b3aadfcc21c06f6e66e6725aee0f1197b0afd87b12504f4d9f4663c2005a\
                                7f447580cfd67eed3e6f27bf7c44ba9ef895fbf834f5fef7151416a41d833dac1c01";
const ONBOARDING_SIGNATURE: &str = "78a6342ec93a04f1273cd2a0b8cbc00d97dc0787357a8d83f302bb0af8f10786\
                                    0d54e7e331cc60f47c446c176a7fbe2ddc5b071d19e7ecfc9eb162ebc755230c1c";

fn reference_order() -> Order {
    Order {
        is_buy: true,
        reduce_only: true,
        quantity: 6_000_000_000_000_000_000,
        price: 1_800_000_000_000_000_000_000,
        trigger_price: 0,
        leverage: 20_000_000_000_000_000,
        maker: MAKER.parse().expect("maker address"),
        expiration: 1_690_995_498,
        salt: 1_231_231_231,
    }
}

fn testnet_domain() -> [u8; 32] {
    domain_separator("IsolatedTrader", "1.0", 421613, &CONTRACT.parse().expect("contract"))
}

#[test]
fn order_hash_step_by_step() {
    assert_eq!(hex::encode(pack_flags(1_231_231_231, true, true).unwrap()), "0000000496318ff3");
    assert_eq!(
        hex::encode(testnet_domain()),
        "d71d7e5fe57a0c579d5fb79b900a1300bb9868e8427e4a252bd9a3017fcf3e09"
    );

    let struct_hash = hash_order(&reference_order()).unwrap();
    assert_eq!(
        hex::encode(struct_hash),
        "194e95cc905a922f77f918b9506e22bc332984eada1410f3164c4cea56439d87"
    );
    assert_eq!(hex::encode(eip712_digest(&testnet_domain(), &struct_hash)), ORDER_HASH);
}

#[test]
fn order_signature_is_personal_wrapped_and_tagged() {
    let key = PrivateKey::from_hex(KEY).unwrap();
    let order_hash = eip712_digest(&testnet_domain(), &hash_order(&reference_order()).unwrap());

    let typed = sign_typed_data(&personal_message_digest(&order_hash), &key).unwrap();
    assert_eq!(hex::encode(typed.to_bytes()), ORDER_SIGNATURE);

    // signing the digest directly gives a different, equally valid signature
    let raw = sign(&order_hash, &key).unwrap();
    assert_eq!(
        hex::encode(raw.to_bytes()),
        "af116b3351e36dbd0e77323d0509d9b3c4b34c1e5143a90c163113ba1173ea62\
         1596c72d947f7d824d2a6c92481bd204013691a1c3d5b2d79efc03ab0bc124aa1b"
    );
    assert_eq!(recover_address(&order_hash, &raw).unwrap().to_string(), MAKER);
}

#[test]
fn cancellation_vector() {
    let order_hash = hex::decode(ORDER_HASH).unwrap();
    let order_hash: [u8; 32] = order_hash.try_into().unwrap();

    let struct_hash = hash_cancellation(&order_hash).unwrap();
    assert_eq!(hex::encode(eip712_digest(&testnet_domain(), &struct_hash)), CANCEL_HASH);
}

#[test]
fn onboarding_vector() {
    let key = PrivateKey::from_hex(KEY).unwrap();
    let payload = keccak256(b"https://testnet.firefly.exchange");
    let signature = sign(&personal_message_digest(&payload), &key).unwrap();
    assert_eq!(hex::encode(signature.to_bytes()), ONBOARDING_SIGNATURE);
}

#[test]
fn order_signer_reproduces_all_vectors() {
    let domain = DomainConfig::for_network(Network::Testnet, CONTRACT.parse().unwrap());
    let signer = OrderSigner::new(domain, PrivateKey::from_hex(KEY).unwrap()).unwrap();
    assert_eq!(signer.address().to_string(), MAKER);

    let onboarding = signer.onboarding_signature(Network::Testnet.onboarding_url()).unwrap();
    assert_eq!(hex::encode(onboarding.to_bytes()), ONBOARDING_SIGNATURE);

    let order = signer.sign_order(&reference_order()).unwrap();
    assert_eq!(hex::encode(order.order_hash), ORDER_HASH);
    assert_eq!(hex::encode(order.signature.to_bytes()), ORDER_SIGNATURE);

    let cancel = signer.sign_cancellation(&[order.order_hash]).unwrap();
    assert_eq!(hex::encode(cancel.cancel_hash), CANCEL_HASH);
    assert_eq!(hex::encode(cancel.signature.to_bytes()), CANCEL_SIGNATURE);
}

#[test]
fn mainnet_domain_differs() {
    let contract = CONTRACT.parse().unwrap();
    let mainnet = DomainConfig::for_network(Network::Mainnet, contract).separator();
    assert_eq!(
        hex::encode(mainnet),
        "cfd1dac230b91bfb8eea7e3843e65c69a1ba006daf038ff561aef69e05e02611"
    );
    assert_ne!(mainnet, testnet_domain());
}
