//! Network resolution from an explicit hint or the address prefix.

use stacksig_types::Network;

/// Address prefixes that imply the test network (single-sig `ST`,
/// multi-sig `SN`).
const TESTNET_PREFIXES: [&str; 2] = ["ST", "SN"];

/// Infer the network from the leading characters of an address.
///
/// A convenience fallback, not a validation step: anything that does not
/// look like a testnet address is treated as mainnet, and no input is
/// ever rejected here.
pub fn infer_network(address_text: &str) -> Network {
    if TESTNET_PREFIXES
        .iter()
        .any(|prefix| address_text.starts_with(prefix))
    {
        Network::Testnet
    } else {
        Network::Mainnet
    }
}

/// Decide which network applies to a request.
///
/// An explicit hint wins unconditionally; an inconsistent address prefix
/// surfaces later as an address-derivation failure, not here. The
/// disagreement is still logged so a caller chasing a confusing
/// rejection can see both signals.
pub fn resolve(explicit: Option<Network>, address_text: &str) -> Network {
    let inferred = infer_network(address_text);
    match explicit {
        Some(network) => {
            if network != inferred {
                tracing::warn!(
                    hint = network.as_str(),
                    inferred = inferred.as_str(),
                    "explicit network hint disagrees with address prefix"
                );
            }
            network
        }
        None => inferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_prefixes_inferred() {
        assert_eq!(infer_network("ST000000000000000000002AMW42H"), Network::Testnet);
        assert_eq!(infer_network("SN2Z3ZTJ5R0QW4X0Y0Z0A0B0C0D0E0F0G0H0J"), Network::Testnet);
    }

    #[test]
    fn everything_else_is_mainnet() {
        assert_eq!(infer_network("SP000000000000000000002Q6VF78"), Network::Mainnet);
        assert_eq!(infer_network("SM000000000000000000000000000"), Network::Mainnet);
        assert_eq!(infer_network(""), Network::Mainnet);
        assert_eq!(infer_network("not an address"), Network::Mainnet);
    }

    #[test]
    fn explicit_hint_wins() {
        assert_eq!(
            resolve(Some(Network::Mainnet), "ST000000000000000000002AMW42H"),
            Network::Mainnet
        );
        assert_eq!(
            resolve(Some(Network::Testnet), "SP000000000000000000002Q6VF78"),
            Network::Testnet
        );
    }

    #[test]
    fn absent_hint_falls_back_to_inference() {
        assert_eq!(
            resolve(None, "ST000000000000000000002AMW42H"),
            Network::Testnet
        );
        assert_eq!(
            resolve(None, "SP000000000000000000002Q6VF78"),
            Network::Mainnet
        );
    }
}
