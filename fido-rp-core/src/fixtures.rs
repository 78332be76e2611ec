//! Captured and generated ceremony data shared by the unit tests.
//!
//! The U2F token below is a test token whose attestation certificate chains to
//! [U2F_TEST_ROOT_PEM]. The Webauthn captures come from a Yubico 5 series key using the
//! fido-u2f attestation format.

pub(crate) const U2F_APP_ID: &str = "https://u2f.example.com";

pub(crate) const U2F_TEST_ROOT_PEM: &str = r#"-----BEGIN CERTIFICATE-----
MIIBpDCCAUqgAwIBAgIBATAKBggqhkjOPQQDAjA3MRcwFQYDVQQKDA5FeGFtcGxl
IFRva2VuczEcMBoGA1UEAwwTRXhhbXBsZSBVMkYgUm9vdCBDQTAgFw0yMDAxMDEw
MDAwMDBaGA8yMDk5MTIzMTAwMDAwMFowNzEXMBUGA1UECgwORXhhbXBsZSBUb2tl
bnMxHDAaBgNVBAMME0V4YW1wbGUgVTJGIFJvb3QgQ0EwWTATBgcqhkjOPQIBBggq
hkjOPQMBBwNCAAS2Wn9rwiTg1/gEixruz3SNic0B3OcEKpGuP+PjJrBM76MyqKWL
YuK5cAI61A1x8yzYRhmFl177inIWQluTgw8Mo0UwQzASBgNVHRMBAf8ECDAGAQH/
AgEAMA4GA1UdDwEB/wQEAwIBBjAdBgNVHQ4EFgQU30qm7aGIfSWzxr+pPCxvSEde
meswCgYIKoZIzj0EAwIDSAAwRQIgWlZvSsbx9U5SmaE/+lNeMUAqTx86blrZsOIU
nP0mBMQCIQDBkm9BVivRM2pbB6aH8wzUJp9ncnPzOCShLaChNKraTQ==
-----END CERTIFICATE-----
"#;

pub(crate) const U2F_REGISTER_CHALLENGE_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

pub(crate) const U2F_REGISTER_RESPONSE: &str = r#"{
    "registrationData":"BQSJJSjIVpvGFBNbBtBjBUriGOt-g9W11OeDKHh8fl5VnAehFIFfam48-tr2KcsOTitH1i3GBMMi_1NcirXATMniQEGXbgmSMf80aUIeF9AiGO1IXRO74O6ODEiwKhduU0vxO5cIJeeF2V7ui6HnVHb1lwkDpm0X1WYm_D3H1yTVtGQwggGYMIIBPqADAgECAgIEADAKBggqhkjOPQQDAjA3MRcwFQYDVQQKDA5FeGFtcGxlIFRva2VuczEcMBoGA1UEAwwTRXhhbXBsZSBVMkYgUm9vdCBDQTAgFw0yMDAxMDEwMDAwMDBaGA8yMDk5MTIzMTAwMDAwMFowPjEXMBUGA1UECgwORXhhbXBsZSBUb2tlbnMxIzAhBgNVBAMMGkV4YW1wbGUgVTJGIEVFIFNlcmlhbCAxMDI0MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAETGKQ5bL5P3UEgQ_Ririrva5k3VvSmmGL986J1GZMjVyOfmB858wBOr1NxIldbEauFVpl635nTHKlyZ9on5gbBKMxMC8wDAYDVR0TAQH_BAIwADAfBgNVHSMEGDAWgBTfSqbtoYh9JbPGv6k8LG9IR16Z6zAKBggqhkjOPQQDAgNIADBFAiEAyE23csJMctalrG0AMChJ23apHSyhXAGTH6z_ybg2kXwCIGO4voFMPD3QjCE7UN3nJKAC4OQagfq7KRvgLdLTMjk3MEUCIHmRMBcupixT-5SUa1cKHbbYLHQtzV59VwAZZuQrmNcwAiEAtdoZKbr3fi1MID-BBIToJIGb34i6fX9nKq1VnK5ixQQ",
    "clientData":"eyJ0eXAiOiJuYXZpZ2F0b3IuaWQuZmluaXNoRW5yb2xsbWVudCIsImNoYWxsZW5nZSI6IkFBRUNBd1FGQmdjSUNRb0xEQTBPRHhBUkVoTVVGUllYR0JrYUd4d2RIaDgiLCJvcmlnaW4iOiJodHRwczovL3UyZi5leGFtcGxlLmNvbSJ9"
}"#;

pub(crate) const U2F_KEY_HANDLE_HEX: &str = "41976e099231ff3469421e17d02218ed485d13bbe0ee8e0c48b02a176e534bf13b970825e785d95eee8ba1e75476f5970903a66d17d56626fc3dc7d724d5b464";

pub(crate) const U2F_PUBLIC_KEY_HEX: &str = "04892528c8569bc614135b06d063054ae218eb7e83d5b5d4e78328787c7e5e559c07a114815f6a6e3cfadaf629cb0e4e2b47d62dc604c322ff535c8ab5c04cc9e2";

pub(crate) const U2F_ATTESTATION_CERT_HEX: &str = "308201983082013ea00302010202020400300a06082a8648ce3d040302303731173015060355040a0c0e4578616d706c6520546f6b656e73311c301a06035504030c134578616d706c652055324620526f6f742043413020170d3230303130313030303030305a180f32303939313233313030303030305a303e31173015060355040a0c0e4578616d706c6520546f6b656e733123302106035504030c1a4578616d706c65205532462045452053657269616c20313032343059301306072a8648ce3d020106082a8648ce3d030107034200044c6290e5b2f93f7504810fd18ab8abbdae64dd5bd29a618bf7ce89d4664c8d5c8e7e607ce7cc013abd4dc4895d6c46ae155a65eb7e674c72a5c99f689f981b04a331302f300c0603551d130101ff04023000301f0603551d23041830168014df4aa6eda1887d25b3c6bfa93c2c6f48475e99eb300a06082a8648ce3d0403020348003045022100c84db772c24c72d6a5ac6d00302849db76a91d2ca15c01931facffc9b836917c022063b8be814c3c3dd08c213b50dde724a002e0e41a81fabb291be02dd2d3323937";

/// Offset of the subject public key point inside [U2F_ATTESTATION_CERT_HEX].
pub(crate) const U2F_ATTESTATION_CERT_KEY_OFFSET: usize = 210;
/// Offsets of the serial number, the notBefore date and the subject common name inside
/// [U2F_ATTESTATION_CERT_HEX]. Flipping a low bit there keeps the DER valid.
pub(crate) const U2F_ATTESTATION_CERT_SERIAL_OFFSET: usize = 15;
pub(crate) const U2F_ATTESTATION_CERT_NOT_BEFORE_OFFSET: usize = 100;
pub(crate) const U2F_ATTESTATION_CERT_SUBJECT_OFFSET: usize = 180;

pub(crate) const U2F_SIGN_CHALLENGE_HEX: &str = "afaefb1d5e2c91d42779fa1bfad8d3a7709e0083bf17fb05187b98b80e306696";

/// Counter 1.
pub(crate) const U2F_SIGN_RESPONSE: &str = r#"{
    "keyHandle":"QZduCZIx_zRpQh4X0CIY7UhdE7vg7o4MSLAqF25TS_E7lwgl54XZXu6LoedUdvWXCQOmbRfVZib8PcfXJNW0ZA",
    "signatureData":"AQAAAAEwRQIgN_eeW2aczeY6cgd4-GvmYYzQfd9z_Cn-HW-azww3bLQCIQDbYAf-4IBpJTLrQb54_5NQSzjz6V2FlP_Kfe0mAC8fHg",
    "clientData":"eyJ0eXAiOiJuYXZpZ2F0b3IuaWQuZ2V0QXNzZXJ0aW9uIiwiY2hhbGxlbmdlIjoicjY3N0hWNHNrZFFuZWZvYi10alRwM0NlQUlPX0Zfc0ZHSHVZdUE0d1pwWSIsIm9yaWdpbiI6Imh0dHBzOi8vdTJmLmV4YW1wbGUuY29tIn0"
}"#;

pub(crate) const U2F_ZERO_COUNTER_CHALLENGE_HEX: &str = "a0cd5a35119e9ddb7cc0fee94e4422f02ce3998ffd79f0c88e43e9902f294cb0";

/// Counter 0, from a token that does not implement counters.
pub(crate) const U2F_ZERO_COUNTER_SIGN_RESPONSE: &str = r#"{
    "keyHandle":"QZduCZIx_zRpQh4X0CIY7UhdE7vg7o4MSLAqF25TS_E7lwgl54XZXu6LoedUdvWXCQOmbRfVZib8PcfXJNW0ZA",
    "signatureData":"AQAAAAAwRAIgdhuTNVNFyTNdMWBHrHMFwlZNynJKczPvIknhEYdnoaQCIBoUV1M76962JBz5yNWuegBw2h0OYyaIeUpJFu6tvo43",
    "clientData":"eyJ0eXAiOiJuYXZpZ2F0b3IuaWQuZ2V0QXNzZXJ0aW9uIiwiY2hhbGxlbmdlIjoib00xYU5SR2VuZHQ4d1A3cFRrUWk4Q3pqbVlfOWVmRElqa1Bwa0M4cFRMQSIsIm9yaWdpbiI6Imh0dHBzOi8vdTJmLmV4YW1wbGUuY29tIn0"
}"#;

pub(crate) const YUBICO_U2F_ROOT_CA_SERIAL_457200631_PEM: &str = r#"-----BEGIN CERTIFICATE-----
MIIDHjCCAgagAwIBAgIEG0BT9zANBgkqhkiG9w0BAQsFADAuMSwwKgYDVQQDEyNZ
dWJpY28gVTJGIFJvb3QgQ0EgU2VyaWFsIDQ1NzIwMDYzMTAgFw0xNDA4MDEwMDAw
MDBaGA8yMDUwMDkwNDAwMDAwMFowLjEsMCoGA1UEAxMjWXViaWNvIFUyRiBSb290
IENBIFNlcmlhbCA0NTcyMDA2MzEwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEK
AoIBAQC/jwYuhBVlqaiYWEMsrWFisgJ+PtM91eSrpI4TK7U53mwCIawSDHy8vUmk
5N2KAj9abvT9NP5SMS1hQi3usxoYGonXQgfO6ZXyUA9a+KAkqdFnBnlyugSeCOep
8EdZFfsaRFtMjkwz5Gcz2Py4vIYvCdMHPtwaz0bVuzneueIEz6TnQjE63Rdt2zbw
nebwTG5ZybeWSwbzy+BJ34ZHcUhPAY89yJQXuE0IzMZFcEBbPNRbWECRKgjq//qT
9nmDOFVlSRCt2wiqPSzluwn+v+suQEBsUjTGMEd25tKXXTkNW21wIWbxeSyUoTXw
LvGS6xlwQSgNpk2qXYwf8iXg7VWZAgMBAAGjQjBAMB0GA1UdDgQWBBQgIvz0bNGJ
hjgpToksyKpP9xv9oDAPBgNVHRMECDAGAQH/AgEAMA4GA1UdDwEB/wQEAwIBBjAN
BgkqhkiG9w0BAQsFAAOCAQEAjvjuOMDSa+JXFCLyBKsycXtBVZsJ4Ue3LbaEsPY4
MYN/hIQ5ZM5p7EjfcnMG4CtYkNsfNHc0AhBLdq45rnT87q/6O3vUEtNMafbhU6kt
hX7Y+9XFN9NpmYxr+ekVY5xOxi8h9JDIgoMP4VB1uS0aunL1IGqrNooL9mmFnL2k
LVVee6/VR6C5+KSTCMCWppMuJIZII2v9o4dkoZ8Y7QRjQlLfYzd3qGtKbw7xaF1U
sG/5xUb/Btwb2X2g4InpiB/yt/3CpQXpiWX/K4mBvUKiGn05ZsqeY1gx4g0xLBqc
U9psmyPzK+Vsgw2jeRQ5JlKDyqE0hebfC1tvFu0CCrJFcw==
-----END CERTIFICATE-----
"#;

pub(crate) const WEBAUTHN_REGISTER_RP_ID: &str = "127.0.0.1";

/// Challenged with 32 zero bytes, origin `http://127.0.0.1:8080`.
pub(crate) const WEBAUTHN_REGISTER_RESPONSE: &str = r#"{
    "id":"0xYE4bQ_HZM51-XYwp7WHJu8RfeA2Oz3_9HnNIZAKqRTz9gsUlF3QO7EqcJ0pgLSwDcq6cL1_aQpTtKLeGu6Ig",
    "rawId":"0xYE4bQ_HZM51-XYwp7WHJu8RfeA2Oz3_9HnNIZAKqRTz9gsUlF3QO7EqcJ0pgLSwDcq6cL1_aQpTtKLeGu6Ig",
    "response":{
         "attestationObject":"o2NmbXRoZmlkby11MmZnYXR0U3RtdKJjc2lnWEcwRQIhALjRb43YFcbJ3V9WiYPpIrZkhgzAM6KTR8KIjwCXejBCAiAO5Lvp1VW4dYBhBDv7HZIrxZb1SwKKYOLfFRXykRxMqGN4NWOBWQLBMIICvTCCAaWgAwIBAgIEGKxGwDANBgkqhkiG9w0BAQsFADAuMSwwKgYDVQQDEyNZdWJpY28gVTJGIFJvb3QgQ0EgU2VyaWFsIDQ1NzIwMDYzMTAgFw0xNDA4MDEwMDAwMDBaGA8yMDUwMDkwNDAwMDAwMFowbjELMAkGA1UEBhMCU0UxEjAQBgNVBAoMCVl1YmljbyBBQjEiMCAGA1UECwwZQXV0aGVudGljYXRvciBBdHRlc3RhdGlvbjEnMCUGA1UEAwweWXViaWNvIFUyRiBFRSBTZXJpYWwgNDEzOTQzNDg4MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEeeo7LHxJcBBiIwzSP-tg5SkxcdSD8QC-hZ1rD4OXAwG1Rs3Ubs_K4-PzD4Hp7WK9Jo1MHr03s7y-kqjCrutOOqNsMGowIgYJKwYBBAGCxAoCBBUxLjMuNi4xLjQuMS40MTQ4Mi4xLjcwEwYLKwYBBAGC5RwCAQEEBAMCBSAwIQYLKwYBBAGC5RwBAQQEEgQQy2lIHo_3QDmT7AonKaFUqDAMBgNVHRMBAf8EAjAAMA0GCSqGSIb3DQEBCwUAA4IBAQCXnQOX2GD4LuFdMRx5brr7Ivqn4ITZurTGG7tX8-a0wYpIN7hcPE7b5IND9Nal2bHO2orh_tSRKSFzBY5e4cvda9rAdVfGoOjTaCW6FZ5_ta2M2vgEhoz5Do8fiuoXwBa1XCp61JfIlPtx11PXm5pIS2w3bXI7mY0uHUMGvxAzta74zKXLslaLaSQibSKjWKt9h-SsXy4JGqcVefOlaQlJfXL1Tga6wcO0QTu6Xq-Uw7ZPNPnrpBrLauKDd202RlN4SP7ohL3d9bG6V5hUz_3OusNEBZUn5W3VmPj1ZnFavkMB3RkRMOa58MZAORJT4imAPzrvJ0vtv94_y71C6tZ5aGF1dGhEYXRhWMQSyhe0mvIolDbzA-AWYDCiHlJdJm4gkmdDOAGo_UBxoEEAAAAAAAAAAAAAAAAAAAAAAAAAAABA0xYE4bQ_HZM51-XYwp7WHJu8RfeA2Oz3_9HnNIZAKqRTz9gsUlF3QO7EqcJ0pgLSwDcq6cL1_aQpTtKLeGu6IqUBAgMmIAEhWCCe1KvqpcVWN416_QZc8vJynt3uo3_WeJ2R4uj6kJbaiiJYIDC5ssxxummKviGgLoP9ZLFb836A9XfRO7op18QY3i5m",
         "clientDataJSON":"eyJjaGFsbGVuZ2UiOiJBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBIiwiY2xpZW50RXh0ZW5zaW9ucyI6e30sImhhc2hBbGdvcml0aG0iOiJTSEEtMjU2Iiwib3JpZ2luIjoiaHR0cDovLzEyNy4wLjAuMTo4MDgwIiwidHlwZSI6IndlYmF1dGhuLmNyZWF0ZSJ9"
    },
    "type":"public-key"}
"#;

pub(crate) const WEBAUTHN_REGISTER_CREDENTIAL_ID_HEX: &str = "d31604e1b43f1d9339d7e5d8c29ed61c9bbc45f780d8ecf7ffd1e73486402aa453cfd82c52517740eec4a9c274a602d2c0372ae9c2f5fda4294ed28b786bba22";

pub(crate) const WEBAUTHN_REGISTER_PUBLIC_KEY_HEX: &str = "049ed4abeaa5c556378d7afd065cf2f2729eddeea37fd6789d91e2e8fa9096da8a30b9b2cc71ba698abe21a02e83fd64b15bf37e80f577d13bba29d7c418de2e66";

pub(crate) const WEBAUTHN_LOGIN_RP_ID: &str = "localhost";

pub(crate) const WEBAUTHN_LOGIN_CHALLENGE: [u8; 32] = [
    90, 5, 243, 254, 68, 239, 221, 101, 20, 214, 76, 60, 134, 111, 142, 26, 129, 146, 225, 144,
    135, 95, 253, 219, 18, 161, 199, 216, 251, 213, 167, 195,
];

pub(crate) const WEBAUTHN_LOGIN_PUBLIC_KEY_HEX: &str = "042e794ce976d0fa4ae3b608912d2e0509c7ba545307ed8249105a113621ff363875690117fddf4387fddbfddf11f75bc5cde18f3b2f8a46784a9bb1b1a6e93047";

pub(crate) const WEBAUTHN_LOGIN_CREDENTIAL_ID: &str =
    "at-FfKGsOI21EhtCu7Vx-7t7FKkpUOyKXIkEBBD_vC-eym_AdW6Y9V8WyKxHmii11EBQEe7uFQ0bkYwb0GWmUQ";

/// Counter 20, origin `http://localhost:8080`.
pub(crate) const WEBAUTHN_LOGIN_RESPONSE: &str = r#"{
    "id":"at-FfKGsOI21EhtCu7Vx-7t7FKkpUOyKXIkEBBD_vC-eym_AdW6Y9V8WyKxHmii11EBQEe7uFQ0bkYwb0GWmUQ",
    "rawId":"at-FfKGsOI21EhtCu7Vx-7t7FKkpUOyKXIkEBBD_vC-eym_AdW6Y9V8WyKxHmii11EBQEe7uFQ0bkYwb0GWmUQ",
    "response":{
        "authenticatorData":"SZYN5YgOjGh0NBcPZHZgW4_krrmihjLHmVzzuoMdl2MBAAAAFA",
        "clientDataJSON":"eyJjaGFsbGVuZ2UiOiJXZ1h6X2tUdjNXVVUxa3c4aG0tT0dvR1M0WkNIWF8zYkVxSEgyUHZWcDhNIiwiY2xpZW50RXh0ZW5zaW9ucyI6e30sImhhc2hBbGdvcml0aG0iOiJTSEEtMjU2Iiwib3JpZ2luIjoiaHR0cDovL2xvY2FsaG9zdDo4MDgwIiwidHlwZSI6IndlYmF1dGhuLmdldCJ9",
        "signature":"MEYCIQDmLVOqv85cdRup4Fr8Pf9zC4AWO-XKBJqa8xPwYFCCMAIhAOiExLoyes0xipmUmq0BVlqJaCKLn_MFKG9GIDsCGq_-",
        "userHandle":null
    },
    "type":"public-key"
}
"#;

/// A packed self attestation from Touch ID, origin `https://localhost:8443`.
pub(crate) const WEBAUTHN_PACKED_CHALLENGE: &str = "lP6mWNAtG+/Vv15iM7lb/XRkdWMvVQ+lTyKwZuOg1Vo=";

pub(crate) const WEBAUTHN_PACKED_REGISTER_RESPONSE: &str = r#"{
      "id":"ATk_7QKbi_ntSdp16LXeU6RDf9YnRLIDTCqEjJFzc6rKBhbqoSYccxNa",
      "rawId":"ATk_7QKbi_ntSdp16LXeU6RDf9YnRLIDTCqEjJFzc6rKBhbqoSYccxNa",
      "response":{
          "attestationObject":"o2NmbXRmcGFja2VkZ2F0dFN0bXSiY2FsZyZjc2lnWEcwRQIgLXPjBtVEhBH3KdUDFFk3LAd9EtHogllIf48vjX4wgfECIQCXOymmfg12FPMXEdwpSjjtmrvki4K8y0uYxqWN5Bw6DGhhdXRoRGF0YViuSZYN5YgOjGh0NBcPZHZgW4_krrmihjLHmVzzuoMdl2NFXaqejq3OAAI1vMYKZIsLJfHwVQMAKgE5P-0Cm4v57Unadei13lOkQ3_WJ0SyA0wqhIyRc3OqygYW6qEmHHMTWqUBAgMmIAEhWCDNRS_Gw52ow5PNrC9OdFTFNudDmZO6Y3wmM9N8e0tJICJYIC09iIH5_RrT5tbS0PIw3srdAxYDMGao7yWgu0JFIEzT",
          "clientDataJSON":"eyJjaGFsbGVuZ2UiOiJsUDZtV05BdEctX1Z2MTVpTTdsYl9YUmtkV012VlEtbFR5S3dadU9nMVZvIiwiZXh0cmFfa2V5c19tYXlfYmVfYWRkZWRfaGVyZSI6ImRvIG5vdCBjb21wYXJlIGNsaWVudERhdGFKU09OIGFnYWluc3QgYSB0ZW1wbGF0ZS4gU2VlIGh0dHBzOi8vZ29vLmdsL3lhYlBleCIsIm9yaWdpbiI6Imh0dHBzOi8vbG9jYWxob3N0Ojg0NDMiLCJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIn0"
          },
      "type":"public-key"
    }
"#;
