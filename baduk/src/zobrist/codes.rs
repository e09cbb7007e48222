// Generated offline with a fixed-seed SplitMix64 stream. Do not edit.

use super::POINTS;

pub const EMPTY_BOARD: u64 = 0x0cbd5d6d797759b0;
pub const BLACK_TO_PLAY: u64 = 0x0b7e4f79607fc577;
pub const WHITE_TO_PLAY: u64 = 0xd093deebf3e5b343;

pub static EMPTY_CODES: [u64; POINTS] = [
    0x27fb2a26ea21f2b9, 0x967dc45494cca73a, 0x47b706e514ec669a, 0xc67aa8c2a1201d04,
    0x5a496b77c7294338, 0x0605aeb5fed4d405, 0x3fd603c2769f97a8, 0x0f0194b9a94a1fc1,
    0x4d963da9772beca3, 0xb69ea3ec367ca2db, 0xacb851399df67c4d, 0xe885db2a6f01c4cb,
    0x1b9b6f19974bd1db, 0x483ae0d1041e434e, 0x9f609635255d59e4, 0x0c1a5c5a9717afcc,
    0x7dc3f623da4534d6, 0x55bb29760fc6607c, 0xd368a980e0fc190e, 0x5c81f96aaa1c79f4,
    0x6a8b905c57f41bb4, 0xfce42a3809c72d0a, 0xae971cd0f154fee3, 0x3185044a30549156,
    0xb8baae801f737bca, 0x7b27a3dc821259ab, 0x7e70f442d347cc19, 0x7d95df8e4fc949ef,
    0x75f6f9141cd6df65, 0x965a27ac74b13a77, 0x4d8e43e3d70544c0, 0xae83a146849e2fbb,
    0x9a6d002d5858db89, 0x36b3f105817ace61, 0x4c74643b224f8395, 0xff03b06d711603dc,
    0xa56dffaa33ed46b6, 0xb0e0fffd974b633b, 0xb5e1ee0c3d60bb6d, 0xbc86ff13a3094bb0,
    0x703d623a034dea54, 0xa663bdcd67e7b156, 0xac7d3170c47781a0, 0xf572c9b688567c8d,
    0x5bda8ee21b57622e, 0x3ff4adf0b9b7b08b, 0x3f56afb0fb919dfa, 0x0b51693699542ce7,
    0xd0a0802e5c1b0ab2, 0x9ad1a7ee2c79923d, 0xf9f4e3a9769d581f, 0xb318872429d59ee1,
    0x762d036c5864ea9a, 0x9ddbd15cf251bb22, 0xe4481b9b7d4aab30, 0x57b2c1eabd535f2e,
    0xb2ed1a014ffe13d4, 0x4f06376f92e3c033, 0x27849ecd9da7eca6, 0xb40dbf595ee025ef,
    0xf826c3a4eec7b61d, 0x899ed74140ef5f92, 0x3776f1255fbee5a3, 0x8b426940a7e94142,
    0x67829f18cd1989a2, 0x52ed525d97f6ab75, 0xe3e2fe40c4dbfe5d, 0x84af1861ecddd785,
    0xc4ea07190d965935, 0x840714cf62a807db, 0x68d06aa31dc56a75, 0x1bcf42f5cb880a66,
    0x032d6e21b379f65c, 0xf0958697c9943dc4, 0x4cc26aea36e5d03b, 0x03eb36b7cba342b0,
    0x3a67bd795e6384a3, 0xa18238aa7240485a, 0x725cce321bd6a295, 0x6970cbdc599bf893,
    0xd29959a92dc5d218, 0x991f4045deef09da, 0x20b6074e5c1adee3, 0x623130a71bfc2ebd,
    0xb794a93d333db313, 0x30921a0cc291653d, 0x6a6f006d69f1f6fa, 0x077184e1aa41ede2,
    0xb08b49654c231013, 0xfd953c11eb0a806c, 0x0579b6c4436c09da, 0x5105d2173db45d78,
    0x925d028779969d97, 0x2807caf4a4fb634c, 0x967ef0551b797221, 0xf09eb8b2b628d640,
    0x47169ce308c5c818, 0xed90b4f7ac061945, 0x9fd027d9421917d9, 0x916fc4b5a19217e9,
    0x40d5f847d4bf45d4, 0x2bfee968915fa95c, 0xefe539fc2b518f54, 0xe069ff3ef70571a3,
    0xa0b8ee2ee609066d, 0x3bcba514d621a1ba, 0x4f9c5c68988a21ae, 0x1a9d6092500ab267,
    0x0f834f0a87585ea0, 0x0335977270bb59e3, 0x2335a0e8862ce9d7, 0xf994e43b8d866634,
    0x4361f7fd17b5d68b, 0x6a2dd8d51db4c4a5, 0x399bf224ae84dcc7, 0xede1d2c293749615,
    0x4b2c7b30a6710fd9, 0x78adb4d6e95195e3, 0x6289e69a1f23d5b2, 0x5762e6c6d8bd47d7,
    0x7630c9b914727249, 0xa7c0f123e6a85c00, 0x964300d5377926ac, 0xcdf56952d6f12448,
    0xba2af04a14373122, 0x69e1cd2f85385af9, 0x9071947784202c9c, 0xd38d8d366f0d6c3a,
    0xb4e62a94c78b7417, 0x1b81da71e0ffe05a, 0xdfe52a8f61f69a05, 0x9480cd5baca86a67,
    0x3af6e229ed93c40f, 0x62b511ec672fcd0a, 0xa041ec06d600bbb1, 0x674f5e0d5d4ee8f4,
    0x03c1791561eb24a4, 0x2e4586f84d12e7a0, 0x465626487567cd0d, 0xce3357f1a4953552,
    0xe7440ee7a8a141b3, 0xe3df7ea9f1297df7, 0xe66903824e7e8f8b, 0xf5872f567b01f30e,
    0x262f4153071b3aff, 0x2d68cea9a5c0fcae, 0x6406f8eecc1d718d, 0xc24b631ba41ed714,
    0x841ceadcfe7305d4, 0xe2886b3967ab2983, 0x5856bb1cbd662d72, 0x2996c3cd10f4d4b3,
    0xc9f67e4358c42e8f, 0x9add8e1ac3924b8b, 0x9477dd883cd9d38c, 0xd86fbffdf0870698,
    0xc4bcde53a75d62a8, 0xd2e2a2fbb733b106, 0xd177f3c75711ac0e, 0xa5428ac1acd1a2a9,
    0xbe426c75412d8845, 0xc0e130125a6e1b76, 0x0aca702b7dc4fce2, 0xea1e49cf56f71add,
    0x879a4036c45ff241, 0x09b06003eea4d6aa, 0x5e9bf20e4c7c2fca, 0x909d7b717e1473c2,
    0xf928c9714e5fcf6f, 0xfafc9429d4a40daf, 0x94aed570ccee583c, 0xd09d1cf00d13ee38,
    0x853c832184a500d1, 0x97344c7b4a4cfae6, 0xcd45013e3345071e, 0xb527797fda9a2201,
    0xaae9adbb2b3cf508, 0x2f985db56b8cb7bd, 0x723d6cde3ce5ae7a, 0xe52b9b2636a1da39,
    0x00a957bef9f857e0, 0x77b9c4336a43c123, 0x82522e41a81c1717, 0xf6d8ee1dd1986d9d,
    0x7a393a62567fb9ed, 0x44bf6294982eceb1, 0xc478f85309f45a5a, 0xe1a8c6a34aba4be3,
    0xac0d255f1ea62472, 0xe5486ba80b1f8767, 0x4e840e92cced619b, 0x901d6181eb160dca,
    0x148cc413aa5c846e, 0x18d69d31fa9a7603, 0xf9e8917b0ff1e592, 0x5a3252dbdddbe349,
    0x6f7c161de7edf536, 0x773769dea7a421c3, 0xc0592dfb0026e46c, 0x05f31e7bec649411,
    0x292094d7f5e772e1, 0x06de315d59e2d492, 0x8920061c35283227, 0x1d3cea83c1b93924,
    0x0898db2d24be72c6, 0x86261ce520e66a4a, 0xfa81844e125d2bfb, 0xf3ed993888b03b68,
    0xba4db5447bf46772, 0x8790e9ff9dcdeb17, 0x998c19e590bba5da, 0x4802e5e177f6756b,
    0xd37cdfa213002739, 0xfea7bf39826e4af0, 0xe18bbe16c55867c2, 0x205c10f3f1cbb57f,
    0xd861257dd1592a63, 0x0596a0b91708f0ce, 0xd43035e24546630c, 0x32e82dce60ef0e81,
    0xb764e8b142a35df8, 0x76d92b0f74b73c74, 0x2f5cfa63f3bfa813, 0xea1cf4caa3751cba,
    0xf8e779383ae43e74, 0x321b771476b5e04f, 0x32028cff32fd9fff, 0x4834022c99b26ef9,
    0x53810884cbde2616, 0x7185c0032913c286, 0x01d0bea513c7aaa7, 0xf4c0a01b656f32a0,
    0x10fef2321dcaebdc, 0x956bbe6445075a21, 0x261c8bc84fc17464, 0x847b221b7fce5166,
    0x3a6576a33778e127, 0x66edfa1de1482d16, 0xea037c222acf0033, 0xd7dcc655adecee9f,
    0x7bff181c052e1cf1, 0x5b67d910f93f8860, 0x76f92dd0aa2e4ff2, 0x29f4a5aa89da8012,
    0x167baa86abf6bd5f, 0x166359546092c687, 0xe9444d265437d2fc, 0x6062a5f8aaaf9f58,
    0x5bc45ff71643093c, 0x05ce11c7899f282d, 0x347e5714cbb9eac8, 0x8c6c546b58c1dcbd,
    0x95373ce96090e421, 0xa72924f852e0e4ed, 0x2f339b3773749af0, 0xe9b770204cf3d40a,
    0x9283aaf6c425e013, 0xbc687904f9a3125a, 0x2f0c8dd82c7ef1a9, 0x8c4b867534f83bac,
    0x21e6af556b94609b, 0xc81005b3484685be, 0x41bf6a3948e2a4a9, 0x5d33e0f754dd06bb,
    0x3621ddf49846579a, 0xb0b3685bb55da3ab, 0x5a513a07e2b7fe43, 0x349bd522b77568af,
    0x875425d89d71f403, 0x93d2c3ed5a89c481, 0xeff80a23c3ccb561, 0x42ac0b6c85d00096,
    0xea895b05dd763bde, 0x068793656af6b49f, 0xc14dbd505823809f, 0xc963341815d924f8,
    0x8d29c31ff3aada81, 0x6d0b1d332951a757, 0x4ef425b69c183fc7, 0x55c1bfe8e908351c,
    0xb29073ee15877839, 0x7222d6ce260a302f, 0x700609c5726a3824, 0x4cd946b5aa618897,
    0x5d91bfa4b588c822, 0xb484b68118cae272, 0x4076c75bcbf68224, 0x7962f1cc36bb0e99,
    0xc27e6d02e2f800de, 0x13a35f643144b985, 0x4d4aa5aa67d00509, 0xa3714efff142cd13,
    0x41ddfcb92b4d28d2, 0x5cc4cfdb9a584404, 0x6fd5de24a7359f0b, 0xf177e9fee1f7231a,
    0x71450be2d9f1c135, 0x41a2ff53e7ccee2a, 0x6cca12b3a77f3004, 0x6d452cc0cb78de88,
    0x0cc6399dc2ab38bd, 0x3bafb5cf1954cb3f, 0x3aee9a12154eeb12, 0x3631b111257088f7,
    0x8c561fdc458a3ac8, 0xe3f56e80db4c53e5, 0x60dd33b87d6be24f, 0x473d164f897805a4,
    0x5689a57aea345629, 0xf551e75ef43c6f95, 0x2c4e89e17f354920, 0x6ab535701e5e588d,
    0x920537dc1e75721d, 0x165f98577704e6dc, 0xcc53a5ae24422149, 0xd4c55096d1115923,
    0x21a27640c08c76b4, 0x9b15de28e9a84e00, 0xe8224e15a34d8d74, 0xbf0611da0aa93747,
    0x7861bc9cd1746604, 0xed93c5879e614a9a, 0x525f94c019c8f8ac, 0xe4d4446a3f9dabe5,
    0xa7b71a9a0372eeff, 0xf67ff549ed251e71, 0xd5acff8bb0180c77, 0x2b20bad1819bbbcc,
    0xc112b90b973f9828, 0x13f3c8ce86c9217a, 0xe75662e5daacff06, 0xea6290827b783335,
    0x5d8937d85b8a5ec6, 0x5411bedd3d6dd591, 0x026aed60949d2186, 0x7a786948224771ee,
    0xa8c9f92cc2f7ed7d, 0xc8607c161b0eabc0, 0xf9fc3e04a0f973d7, 0x19b63e11e763afb0,
    0x0d238236af71ced7, 0x101cc5353ebb1f80, 0xe40f39cbc5c01b40, 0x843a8db7e9e23ad9,
    0xec9d04f08c254a16, 0x873e02ef64d31ba6, 0xe1eb0176d3b7daff, 0x2fe5b23448284d90,
    0x0e621904bb9094bf, 0xf96d31fe124e956c, 0xefc4c543a4466063, 0xef0a9085d24ace21,
    0x0d29c8cf4ad87c75, 0x6e699ad128aa65c5, 0xa319fb26409bc9dd, 0xc8e643d679f1ea57,
    0x0de8769b631e86ad, 0x2184afec72bd2693, 0xab2fb9a142b7fece, 0x5342c1851a3a0c15,
    0xd17db0eff7148fae,
];

pub static BLACK_CODES: [u64; POINTS] = [
    0xfb6e6efcad5dad88, 0x496fb5de2ed5d547, 0x23a720e2a3411e03, 0xc489e7629b644ec5,
    0x59d1db07c0b31f2c, 0xff5fbd620a3bdb91, 0x0b02200d4ff81ada, 0xec2fe33d56a29805,
    0x34fed74b6009c20d, 0xa10de230499bb745, 0xe6fe77d32ff8a017, 0xd5b5c0dac02a0b8e,
    0x1280254173741315, 0x9e663defd1c4bb65, 0x8d9c5a2f8779f1f6, 0x3a22a3f39d20c269,
    0xe8883b99df2bce30, 0xfae25452ea407d60, 0x761324d224b2da44, 0x38555918a4fd2993,
    0xcdd2a25de99fcda1, 0xa9111f283d710b39, 0xec3492c1dade7489, 0xd73c7f6492dcd9af,
    0x3e87da49ca473bf1, 0xab646e8de76b01f7, 0x732a82aa4e79f625, 0x979d76526162459c,
    0x93701a56aeee1ff7, 0x613ce356f1a4a30e, 0x25c6d806d2a20e61, 0x0624e7efc185a2af,
    0x533c398e909420cd, 0xd17bc7e9c360e1b1, 0xd43f118ff02cb293, 0x09ba108d980ab58d,
    0x2fcd3f523efbb06a, 0xdb3713849a12f490, 0x1f7b8fe249d0d935, 0xdb225905980400fc,
    0x63144ea240eb9ff2, 0x77ede138113c5e10, 0x9b2f2de5e5895705, 0xa8e2f59742584220,
    0x5a063875927b2d21, 0x502a88b0a105009f, 0x1d6561c42648dedc, 0x93141570c7a7843e,
    0x4d81492221c608d8, 0x488675bf8260a6e2, 0xd9f538f5a2d0ed74, 0x8d642ba1d2722f21,
    0x47b397161ea9a3af, 0xa4044a41d51a2d03, 0x26e6645d7e4f1b9d, 0xbcac26ac5c248d02,
    0x9a9bc7e0578d1ec1, 0x9c3d96c7e2e4f92e, 0xa8a71357d0ae63ea, 0xf68d6a4b462e5ab6,
    0xc5d401a8836cb528, 0x3be9052d4933af78, 0x5eeae376186d51f4, 0x569a2937c1cb3dcf,
    0x22af72bd4ac41aba, 0xb5ed2e59b481fb2b, 0xe94d1a022931d3ee, 0xa217dcba69869906,
    0x34b041c17701b5de, 0xee43ec0aa1c1a5af, 0xd8d5535826872051, 0x661fb54d8a441a9f,
    0xea59480db326e2ca, 0x34196355f6054223, 0xc68156af977f7167, 0x8527a3934f5fe730,
    0x5bc01707f6e24d5d, 0x62455fe2507a0b9a, 0x2062c1721723e759, 0x2b127131d8cad55e,
    0xf4381bd7068ea48c, 0x78e796b2b5094fc8, 0xf8a247c54f692791, 0x08c60862482ebd22,
    0x528bd1c35fa9dbe2, 0xb86c017a576484d5, 0xbec2edb69a3056ac, 0x531ba82ecc865214,
    0x08480bcb8ebf4d26, 0x7dfa735aac3c5b22, 0xa8f7587c5a2922ee, 0x28376db47e3049a3,
    0x6c54ee6ce71fb590, 0x085f301e52fa1077, 0xe1c3727265174887, 0x3fc97a3259cbdf29,
    0xea66e54ecb295cdf, 0xecda0a72d2647890, 0x6edaab3dca8788be, 0xeaf0eb078ae32cd1,
    0x8be16c12ad3fd1c8, 0xe670c993f60cc9df, 0x3f99f26a72ec0c83, 0x927073bc1f5d5a4b,
    0xb41b72433722ed2a, 0x81610eede8cb8447, 0xc51e1403cfb6b0c2, 0x5d69ae2e8d67810d,
    0xf09f7f92e3b6db5a, 0x3bf8a6d0e05751f5, 0xa0d7e5973bfb9991, 0x39bec5bd1f7cf191,
    0xfa490ef978053c32, 0x88af987a3b84e2d0, 0xa0cd19e3697dbff8, 0x42bf01c301e24f2e,
    0x90ae787e8d77eb9e, 0x018b1b2ba466eac0, 0x38ead032befabf0a, 0x8e8e55b3aef7684f,
    0x55235d22eb86cc96, 0x8621aba1c0eff82f, 0xedb5ff4bd9cc8069, 0x93499a06a9802b41,
    0x1bbe35bcd99dee08, 0x4193a184d07b1e10, 0x65c9819767c6f45b, 0x54ffb3d4745dd84e,
    0xde7717275d79be46, 0xfa6e91d53e2c258f, 0x5e5a423cf7bcd841, 0x0b1f6a86be7cccac,
    0xeb63e697ca51fbca, 0xcc61b0e3a91f8f1a, 0x8840ef32e0d948be, 0x70927024abddd2b7,
    0x04e62ef2d910ca82, 0xf39fb6888d2a4317, 0x93a2715b54a70064, 0x4673bdda5ac3eba9,
    0x067fab9cfb8c0a92, 0x71ba5b9da4b0c7a0, 0x1cc88ed38c86c69a, 0x8c98702fe002bacd,
    0xd1a3b91f9c8c083e, 0x986d1c9bbbdaf566, 0x79757bb370379936, 0x319d2cb73c8e35b9,
    0xea8428cbf5450156, 0xe054b8df80bb9aaa, 0xf2184a6f6547ce6f, 0x9fb98684b549b1f1,
    0x58d6b6c52ae41353, 0x468ff84d241fa542, 0x1b3f62346c00f8c8, 0x3c78e6cea2e4b779,
    0x08ec7507bee7532e, 0x7363dbecbc5aae41, 0xd0838d406aab4a87, 0x17535d49d4277232,
    0x8e763685a1cbefa0, 0xabdba487ff90317e, 0xfef9e48cdba51477, 0xc4e69dfe1d0468e1,
    0xfcbed9d24ea4b109, 0x2d4f5be097412808, 0x1567f13c6ca4442c, 0xc6bdec62f247cdeb,
    0x95465dc77f7cb1bc, 0xcf37533036639985, 0x4fa89b8508a5d855, 0xce917064ccde6c02,
    0x413a439618853912, 0xfb06f3f39d741d92, 0x0b2378c43524a219, 0x09ed483774d76010,
    0xa71e82481940f739, 0x945d17abf4a86dc0, 0x742f2dec74d75d80, 0x5d951ecc24d7a4ca,
    0xe891dde247b5c44a, 0x769b3a631a62e357, 0x5e504efb1fbba789, 0x7d0c1288099d3f43,
    0x407da8ce5f9aa2ae, 0x1dcb5df796ead065, 0xf672ba6cff0bb880, 0x2d818aa0f9261f93,
    0x63eeb2a1e622741c, 0x9491d2fcf3cc53c3, 0x1e22610916744794, 0x3cc651e8c473069c,
    0xe205708dfdc6bf96, 0xaddb09265eb304ca, 0x7e31e3371d864842, 0x700d334a2c551f4c,
    0x89800531da9a3cc7, 0xe213c9d741a085fb, 0x9e91b9d6b8105afe, 0xddc676bf34a770d9,
    0xb558fca8a14415db, 0xc45087f936b173af, 0x1bd6a465f4e538d6, 0x8c347ed8e1bc4921,
    0xb454299b9dcda0f8, 0xcf48fecb815bc3d9, 0x93728808ac3dc963, 0x3fdc6fd8b6f73790,
    0x793b90c0db337bbb, 0xcc6fe347b44507bd, 0x4612a71f48f87cf1, 0xc3ca9883fd77c82f,
    0x2e8c8ed89c99fcf6, 0x63c35e17d0e55a36, 0x20194e582b1b94db, 0xa252f7a1eebd4aa5,
    0x2c5fba4508d884eb, 0x773e64469aaffbfc, 0x670297427f94e3d3, 0x9ff3af934bd46af7,
    0x5f3140fbe93f3488, 0x04e5f5a010b507dd, 0x330c2aafc55db933, 0xab9b28be230ef74a,
    0xaa77324dd4b82cd3, 0xf7b52aaa36f22410, 0x96d82edea32dc9ea, 0x8a64e94c3ec42e49,
    0xbe63743e952f9a85, 0x978ef242293c1afa, 0x53eefbe496ae46e6, 0x71943e53507b51d9,
    0x660b5e0eaa2418f8, 0xff5d91cc33efcee7, 0xdb5a5d8c7c4bc1f8, 0xae7b88b27840e937,
    0xc1cf2cd97cc99ae6, 0x458244146e01944a, 0x532749950841ff2d, 0x70c8292fa6d53b56,
    0xb0d747e4e2222151, 0x61199268fd381da5, 0xbbaf58fe8b8e917c, 0xd4a718fcf33ab2e7,
    0x348ef2cbf98ac85d, 0x3068642c8a91eee4, 0xb1a095b60c366ba1, 0x3ad74be30d38452b,
    0xdd9595fb7c587186, 0x540e1663984a0cc1, 0x4ff54ddb13e5733b, 0xbfd7c4b7447cdc2c,
    0x98ea9ccdafecb02d, 0xf4a7a2c912605122, 0x6f4d56ca37586e2f, 0x3cf25c0079c1717c,
    0x2675e6cfffcf2d0c, 0x727da277a14d8c9a, 0xa8766c1dde1f3382, 0xf5f56697c053aa24,
    0xc55c568a5929d50a, 0x91b6e7a3f827fd3e, 0x31a20ddce54f1f3b, 0x6eb79131a4da606a,
    0x000357577d4c9691, 0xc4391e617a19c8ec, 0x500715c13ef8fff4, 0x945865e7ebf3b24f,
    0x26cb8faf0be348e9, 0x5f520d694d7c60d1, 0xe36795d6315fdfc9, 0xc401e502fe3a3424,
    0xf7240a69c8850670, 0xbd99e026db2e67d1, 0x2d6c74c18bda96ff, 0x2f2e6e67a31c2a77,
    0xc23522f0389ce955, 0xe3c4987d4e13a1ee, 0x256056c259918feb, 0xd4aa5a36c74971ec,
    0x7e83d9952717e95f, 0xcec311fd1a549cc4, 0x38a00612edae8969, 0x26e9b2099b6b2b2e,
    0x354744fb1999ad37, 0xef95c83f57182664, 0xf7ef86a9f04d0fc7, 0x99d972b274152b68,
    0x88dac00f73793386, 0xbf8062ea146b4769, 0xc069a8ecf2d36620, 0x2dc17815e0b785a5,
    0x5dafe8f172678c93, 0x6966df59e137e10c, 0xc59f2c0892ce7d2b, 0xe5dbad6280676e93,
    0xcf772bb700e40374, 0xe35817f414da7a25, 0x83096cf514266755, 0x3d53a058e1fb689c,
    0xd859d021a0eb8fbe, 0xd882599fd2f2fb4c, 0x3ad9c10641d69c32, 0x98407b7808508d44,
    0x600b02e9f4f0cc1f, 0x0c1ff143bfd8d10d, 0xc911b78719d21075, 0x813b7cfda75b2310,
    0xa1f7cbf73d10bf8e, 0x988df7deba6b1a98, 0x176deae9a053d9c7, 0xd9325e39bdc85007,
    0xaaec46776f15ac83, 0x593d06dbe24e0cad, 0xe6605606b7fcb3eb, 0xcfbf6b1c760ce2a1,
    0x78b745609cbb381f, 0x8a5ad664f6dc62a3, 0xf5c7132335a896c2, 0x76383997fd571d6b,
    0xdae475d08aaa1a8d, 0x98146e7d47eb3927, 0x81f8aa48544e8aa6, 0x87abcaffc245b9fb,
    0x5dd55eb11fdeec4e, 0x440985669d60f799, 0xebb8469c742190e6, 0x520e5a4cc5a4df2c,
    0x8dfe72a52034043b, 0x803982e2ce502c8f, 0xb086e67e8da5fd03, 0x3a08390e6b53062b,
    0xbb53663ef4f77ecf, 0x9e99979e79b3a044, 0x53e8591469a32c84, 0x60c1ecad8e15dc72,
    0x664af679fe97ef21, 0xca4dee31d4f09ef2, 0x7dbc57ab039df2af, 0xcffecdf4229f7c65,
    0xa6df76d194c01e05, 0xc8958a4ebb049b27, 0x809dac722b666c73, 0x5ea91275fee8fdbb,
    0x3bebc16d37bb6268, 0x233686951480f742, 0xba3393b13c84c7a3, 0x102312f595c1a738,
    0x3329d241e1fc2eb9, 0x889ee149c3be63cc, 0x4517f8b8ff645489, 0x702e00762b13b545,
    0x122d637ae24fc91d, 0x0d6d5c1f606a842f, 0xe1db86fbb736ac5f, 0x08665688c3666511,
    0xcea9906a1e9e6785, 0xffb0044b5e828d0e, 0x68a8b2df1cdbbe2c, 0x510bfddfb2177e12,
    0x3ff1ddd07243ccdf,
];

pub static WHITE_CODES: [u64; POINTS] = [
    0xe8227d4b70789d33, 0xbd1840dec465832f, 0x2e5fce53c175774f, 0xc2755b9d15d62825,
    0xae61b64e2698e643, 0x9c8eacd70809303a, 0x66958fe2158a919e, 0xfca1c9daf0a0b397,
    0x90806e26a76b37e5, 0x2021d4002c3e92de, 0xdfae1ffdac1d1bea, 0xc8e57600206d40fb,
    0x55bd58f58b8327d1, 0x310e8a5b2a95b782, 0xe7397b8c96f67220, 0x4e050b36432e5b29,
    0xc9cc51eff45d8485, 0xc78f9ed5d7d65866, 0xdc84108a72f09fc7, 0x4b9f9f54332c87ba,
    0xe882d4d492251bde, 0x582eeaa4dd00e629, 0x5e13524825e898de, 0xb970656085991f9c,
    0x7bd62df26fba8912, 0x2ef6a52ad905cb1a, 0xa69b6fe2255cec45, 0x787fe7097b6df7ae,
    0x256c83dbd3b3fa87, 0x7971f481303b43bb, 0x6c8511ad33e0803f, 0xcb6f9bbaab2bf22d,
    0xd852bf83eb521f6e, 0x0d1c22438a856776, 0x07208f71015d6d0f, 0x1187ffcf281796fa,
    0xd7ab278588276149, 0x4047c03750292f49, 0x5568f314b5f6f6c9, 0xb8b9d836b93b983e,
    0xa196b1378ecee5e1, 0x71d3053ed7deb0a3, 0x6ce147dd337ad999, 0x641101d0ab029193,
    0x1e8354c5f94dc7f7, 0xd6da074a4463ca98, 0xa282bfbbf1d15b48, 0x4c6eaee6cb64691e,
    0xb74fc43d56ee9ae8, 0xb957f2eab73e3253, 0x28932705e855116f, 0x3ca7f3f24e2ed6e8,
    0xb25d2b0608a17322, 0x6dfb2a0342cc6613, 0x31ebf3b5fcd7a7ae, 0x0a1bbb15664f7aa2,
    0x34c92bac890a1a96, 0x11b332be471d38ca, 0x5d8b07c41339461c, 0x5f5aeb63c12147ff,
    0xffa276f02e0cf031, 0x1cbc82b269e5a2b9, 0xfed209c1767664e5, 0xfee192f24dc60a15,
    0xfcc29cc936d4a52d, 0xc12e9daf15fe85cc, 0x2dd1dee5177999b9, 0x89e74cd12b81f898,
    0x907d1cb1e36ca9ee, 0x15887ca6fe6f62ea, 0xb851a5028ebead44, 0x7f5e36e8eb849ff9,
    0x990eca32a3831913, 0x140c834f64e09f60, 0x5ca2f6733308c3b6, 0x939dd82f6c188fa6,
    0xa97d7a99051fb4a7, 0x1b408981b12f5875, 0xcb070aad7b2e7225, 0x7443bb28c9f75de6,
    0xffd647efe73cdbb7, 0x2eace927bf5da0dd, 0xb6b912006c9fcf55, 0xb9022594a57bcf6e,
    0x0411c79e31f819aa, 0xb2e3cebecf506588, 0x42e9010aa838335a, 0x9472ef084301d1e9,
    0x45c718816f464fa2, 0x751bb260a725f3e8, 0x458d8f10c78e26e6, 0xd647713e213c5eee,
    0x782b643f86cc9e57, 0xf41cfbce7eb1864b, 0x4da9cb8d2cfcb62e, 0xbee77c457937857b,
    0x5baabc45ce033ab7, 0x820c202749c04ff1, 0x2b03f8246c8a06c3, 0xb0d3b7087873ce1d,
    0xeed45440670b2981, 0x621a0be181a65646, 0xdb9e32df15079367, 0xcd2884d1e90c6c07,
    0xaa67e079f7adee00, 0x45e8e23860873711, 0xdf22abd0687ade6f, 0x96af2a88d5043c25,
    0x486e40bdc6a69d02, 0x7019add74071d075, 0x513453d000fdde38, 0x8e551d1b32820abf,
    0xe44244c8cff28c91, 0xf3569946a6a4f7f7, 0xac405e8023e25bd4, 0x16c9f98f6dc2f278,
    0x649e15ffb2a80727, 0x610f81a9dd40ee10, 0x748797efa2978eef, 0xcc592ca405de0e3c,
    0xd3e512dad1b5f5c5, 0x33543c2abd0ee0a4, 0xb2c25f7b9790c387, 0xcc558b016016945c,
    0x506a8372761742d7, 0xf9cdf665850f82ad, 0x59a39ced0c14d753, 0x88e960a3b023e75c,
    0x1962b05b6c3dbd2a, 0xd8d6f1294b96b702, 0x945d6c238f8e8181, 0x251f6a317b686240,
    0x40821444b30731bf, 0x2909e2f72188f5e1, 0x5691d1cd782ee98e, 0x6d1bfb2c26baa291,
    0xde54255233d36bc5, 0xa2404c03b8416f9f, 0x7351dd980a99ff43, 0x47290dc25ccf3a9e,
    0x89a131f1af3aa696, 0xc71caeaa8eedfaa4, 0x719b86674412c78b, 0x93b5b82211ae22f9,
    0xe58d70dd10cd7f6f, 0x9cf7aa96aaf76777, 0x8dd9be5c66cdb674, 0xc62be0b864d29ec5,
    0xaa4ee1c9f3604e10, 0xa97e2ec15b7ca2d5, 0x4c1294662dcf00d5, 0xe93ef0f8ea56db25,
    0xa519391dff58e51d, 0xc8d99f3673abc40f, 0xbf0333740575ccb7, 0xafb5ff6e1ae00924,
    0x7844b14da8c02a64, 0x594a0f3a5af38d80, 0xfa878eca0225b315, 0x9c897bbf34eb89eb,
    0xe456917aec8d4a10, 0x4acd588863598a38, 0x4ec294a8ec116f30, 0xea1cf155199d4c1b,
    0xb23f1518ca6e2b67, 0xbaf7925d0e8165bc, 0x47fcdc7099a7d2ca, 0xd9494dbf0bee82bc,
    0xe762ff842a9e24f8, 0x408d1cba6e5641b2, 0xf304e95e618297b1, 0xdaf3c19cd8ed5022,
    0xd642f8e2f3515ac7, 0xbd5229fe648beee3, 0xbd608e1e1e5761e1, 0x11dc67efae18eb35,
    0xdf4e3b8cee5a2461, 0xc598c4a969d333e1, 0xdb2a2983072c0812, 0x44a2270ef74c1fdf,
    0xddc0686bfd7801ae, 0xb9c8abbce69c9938, 0x0b30f1a312973160, 0xfc812f4d4d9c3eed,
    0xb16cf5142b1ba3a4, 0xfae2eeac253dcbea, 0xfa16ccfda10fe107, 0x5f8f4209c7936e43,
    0x25b4d3a6de572e3e, 0x5ccfce55d2a63f72, 0x7d5304ab78b8d02a, 0x9645d8b5c4b134dd,
    0x3f45bb73fc2adf1b, 0x2f1e8ac5277aca7b, 0xdf85af4573e01029, 0xb1c4b8debaa5e4b0,
    0x2f14e8c34a73b0ac, 0x795dfa79900431b6, 0x03408ceb816a5487, 0x50ef0defa40f7bc3,
    0xbca8aa64391a5696, 0xba77d020980cf8eb, 0xc5e107467842f3d3, 0xd946bfa9a507e083,
    0x87bc403b6d1a8928, 0x5c9c9f1e7b70ee20, 0xcf9a2039037a6044, 0x30ac4192385889de,
    0x82e96b6d71ba0a1c, 0x43453e8fc1c467d6, 0x18b0c6d8903a2a39, 0xa3c5e7ad5d43a28c,
    0x2f80705550610209, 0x81b06c0ba4205938, 0x916fb876dfbc1246, 0x0da9c53d29205e3e,
    0xabbf38140ec73931, 0xd987c5e12ec0c320, 0x9923625942cc48f4, 0xa25fb1503e7be9b1,
    0xa8291f987863074c, 0xf8b9e242c645fade, 0x1790b3a97599acae, 0x579fe9f548028210,
    0x32c82264e265b268, 0x1473cebc02fa18e1, 0xc86db60bb0097494, 0x661add80eaa07ed4,
    0xee55f7d69494e655, 0xb29fc266305e7346, 0x1556ef40f3826bfd, 0x272312233b2a1a98,
    0x98f07d2b782369c5, 0x82db32bb8a726ff2, 0x5e862bff55b1d63a, 0x8e25a2a2f1b992f1,
    0x11bb51386225fa26, 0x3c6098bc5409e596, 0xdd9435c718f0942a, 0x703b3e845744e0a6,
    0x059005cbc2e14131, 0x8416fa82987e50ec, 0x0d1c7cec55397ef4, 0x798cf754aac334db,
    0x4c12b8c880b698c6, 0x7a67c550ee00144d, 0x4625a05e710bdd1f, 0xbea415d8f430aa6d,
    0x7bb91908dceaee9b, 0x92a79bb0c420e0ba, 0xb6bf2964bb152401, 0xa933596ff2d2a749,
    0xdd1e183afc51488d, 0xd3fd36081e503f41, 0xf893d0578174ea2a, 0x08011b56504b0fa7,
    0xf69add01180cfa9a, 0xe662929900f62eb2, 0x2a2c30bf2f9dc3a5, 0xe3db02c063efee92,
    0xcbd873f62d1dffb8, 0x0f6ad801a2041743, 0x08d629e6e55315d9, 0x2b2efff68c97646c,
    0x3ec31babd65de314, 0xbe94f4a67be04992, 0x81f56420247c4601, 0x879e6d4eb2168cd5,
    0xd12592f380c92196, 0xc339d2ae846f53e3, 0xe7213f560836879e, 0x5145d253491ec442,
    0xdfdeb47f41b9e627, 0x94f53353c9d00bc4, 0xdb607e29e8494dc1, 0x640e7f1f70d4a4d6,
    0x45ed086941b1d309, 0xdca2c671f757ad2d, 0x48aa73b441d2459e, 0x8cc4365d552716c5,
    0xb321c7162d20b8c1, 0x83ef1b914cbf540e, 0xf822a46b7142fa8c, 0xac63aac3a85e6ce1,
    0xb14d2484798bd71e, 0xc9018387d959f70c, 0x2747179a279e2e61, 0x0b7150a26a6371ec,
    0xa02913ba075505c6, 0x44b661f3cce21f78, 0x015301fde3f5d182, 0x8ed8f4b9987b641a,
    0x2607e516a6874bd1, 0xd12a7a25be48dcab, 0x48f9fc49e21f4a34, 0xba718bf5b487d943,
    0x28fa266623d9f64b, 0x7e78dfe34917e7ab, 0x519575adbfe9c5ac, 0xe3481046a3a3914d,
    0x1e23609645c58c04, 0x7ebf7ba6ff5bfa75, 0x4212ce087d3a1c40, 0xba2835344bc6ec05,
    0xb110d95c4f07a9d0, 0xfc39ce8e5bbeff4f, 0x046048ba17509c27, 0x48672dfc302ef7e4,
    0x994b8c9bd639f548, 0xed77e5b4ffc574a6, 0x51aaf679849ff5a0, 0xb7ba8c30e67839e9,
    0x875530f31fbd26fc, 0xd7259f6d20904c47, 0x4b0e397778769d77, 0x80fbc0cd59bb97d1,
    0x687c00142e526dc1, 0xe839092402af779d, 0x4f863b98a38ec08a, 0xd002415c72b61d17,
    0x8555b6bb720584e9, 0x50b40b009eb7b49c, 0x202261bf7261d674, 0x9a152dd73c138793,
    0xf71a2187041d468e, 0xe73b30ecb93387b4, 0x840114bc06c9b3c2, 0xcbf5325377c0ffb0,
    0xf984408d0a851b9a, 0x8bcbced256e9ac09, 0x75a0b5a22920bc88, 0x2aab1a72e80d69b1,
    0x83d5b2e50856f2a8, 0xabf982632bfa96e8, 0xbac6022003299a73, 0x4d097833b70b3e3f,
    0xe0858a5b047144a6, 0x11cd3611b35f016a, 0x22958a1d01c58927, 0xf78cb6bf70ae55e3,
    0x80b7a5483b554d39, 0xf606de45571b97ec, 0xa2416a5ad75f985f, 0x3bcb332017da2a72,
    0xadb42c54052c81ba, 0x20cd9842945c60ce, 0xe64902c2c90825b0, 0x9c5979bd6b25a15b,
    0xce9b6313cd8ca0e2, 0xcf3b641501808cd3, 0x9298f05041f08bad, 0x0fbd8361a5826e19,
    0xf61ca7305228dd1b, 0x9f320922d65828bb, 0xc7a8135361adf74b, 0xac34c188c292df5b,
    0x2fb7d5234173fdd0, 0x11cc2faa0a51124e, 0x9e9e4a24996e7331, 0xaeab7e9cb4310aad,
    0x00ae218b4db33f55,
];
